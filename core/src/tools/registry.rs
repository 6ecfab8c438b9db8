//! Tool registry for managing available tools

use crate::api::AmadeusClient;
use crate::tools::{Tool, ToolDefinition, ToolExecutor};
use std::collections::HashMap;
use std::sync::Arc;

/// Registry for managing tool creation and registration
pub struct ToolRegistry {
    factories: HashMap<String, Box<dyn ToolFactory>>,
}

/// Factory trait for creating tools
pub trait ToolFactory: Send + Sync {
    /// Create a new instance of the tool bound to the given API client
    fn create(&self, api: Arc<AmadeusClient>) -> Box<dyn Tool>;

    /// Get the name of the tool this factory creates
    fn tool_name(&self) -> &str;

    /// Get the description of the tool this factory creates
    fn tool_description(&self) -> &str;

    /// JSON schema of the tool's arguments
    fn tool_parameters(&self) -> serde_json::Value;

    /// Function-calling descriptor, available without an API client
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::function(self.tool_name(), self.tool_description(), self.tool_parameters())
    }
}

impl ToolRegistry {
    /// Create a new tool registry
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Register a tool factory
    pub fn register_factory(&mut self, factory: Box<dyn ToolFactory>) {
        self.factories.insert(factory.tool_name().to_string(), factory);
    }

    /// Create a tool by name
    pub fn create_tool(&self, name: &str, api: Arc<AmadeusClient>) -> Option<Box<dyn Tool>> {
        self.factories.get(name).map(|factory| factory.create(api))
    }

    /// List all available tool names, sorted
    pub fn list_tools(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Get tool information
    pub fn get_tool_info(&self, name: &str) -> Option<(&str, &str)> {
        self.factories
            .get(name)
            .map(|factory| (factory.tool_name(), factory.tool_description()))
    }

    /// Descriptors of every registered tool, sorted by name
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.list_tools()
            .into_iter()
            .filter_map(|name| self.factories.get(name))
            .map(|factory| factory.definition())
            .collect()
    }

    /// Create a tool executor with the specified tools. Unknown names are skipped.
    pub fn create_executor(&self, api: Arc<AmadeusClient>, tool_names: &[String]) -> ToolExecutor {
        let mut executor = ToolExecutor::new();

        for name in tool_names {
            if let Some(tool) = self.create_tool(name, api.clone()) {
                executor.register_tool(tool);
            }
        }

        executor
    }

    /// Create a tool executor with all available tools
    pub fn create_executor_with_all(&self, api: Arc<AmadeusClient>) -> ToolExecutor {
        let mut executor = ToolExecutor::new();

        for factory in self.factories.values() {
            executor.register_tool(factory.create(api.clone()));
        }

        executor
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        let mut registry = Self::new();

        registry.register_factory(Box::new(crate::tools::amadeus::AccessTokenToolFactory));
        registry.register_factory(Box::new(crate::tools::amadeus::HotelListByCityToolFactory));
        registry.register_factory(Box::new(crate::tools::amadeus::HotelSearchToolFactory));
        registry.register_factory(Box::new(crate::tools::amadeus::HotelBookingToolFactory));

        registry
    }
}

/// Macro to help implement tool factories
#[macro_export]
macro_rules! impl_tool_factory {
    ($factory:ident, $tool:ident, $name:expr, $description:expr) => {
        pub struct $factory;

        impl $crate::tools::ToolFactory for $factory {
            fn create(
                &self,
                api: ::std::sync::Arc<$crate::api::AmadeusClient>,
            ) -> Box<dyn $crate::tools::Tool> {
                Box::new($tool::new(api))
            }

            fn tool_name(&self) -> &str {
                $name
            }

            fn tool_description(&self) -> &str {
                $description
            }

            fn tool_parameters(&self) -> ::serde_json::Value {
                $tool::parameters()
            }
        }
    };
}
