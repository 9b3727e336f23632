//! Tool registry: name to tool variant.

use crate::locator::Resolver;
use crate::tool::Tool;
use crate::tools::{
    AssertEqualTool, AssertValueTool, ClickTool, FillTool, GetTextTool, GetValueTool,
    SelectOptionTool, SetCheckedTool,
};
use crate::{RegistryError, Result, ToolError, ToolSpec};
use page::Page;
use policy::CapabilityKind;
use serde_json::Value;
use std::collections::HashMap;

/// Every tool this crate ships, one variant per tool.
#[derive(Debug, Clone)]
pub enum BuiltinTool {
    SelectOption(SelectOptionTool),
    AssertEqual(AssertEqualTool),
    Click(ClickTool),
    Fill(FillTool),
    SetChecked(SetCheckedTool),
    GetValue(GetValueTool),
    GetText(GetTextTool),
    AssertValue(AssertValueTool),
}

impl BuiltinTool {
    /// One instance of every tool, sharing `resolver`.
    pub fn all(resolver: &Resolver) -> Vec<Self> {
        vec![
            Self::SelectOption(SelectOptionTool::new(resolver.clone())),
            Self::AssertEqual(AssertEqualTool),
            Self::Click(ClickTool::new(resolver.clone())),
            Self::Fill(FillTool::new(resolver.clone())),
            Self::SetChecked(SetCheckedTool::new(resolver.clone())),
            Self::GetValue(GetValueTool::new(resolver.clone())),
            Self::GetText(GetTextTool::new(resolver.clone())),
            Self::AssertValue(AssertValueTool::new(resolver.clone())),
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::SelectOption(_) => SelectOptionTool::NAME,
            Self::AssertEqual(_) => AssertEqualTool::NAME,
            Self::Click(_) => ClickTool::NAME,
            Self::Fill(_) => FillTool::NAME,
            Self::SetChecked(_) => SetCheckedTool::NAME,
            Self::GetValue(_) => GetValueTool::NAME,
            Self::GetText(_) => GetTextTool::NAME,
            Self::AssertValue(_) => AssertValueTool::NAME,
        }
    }

    pub fn capability(&self) -> CapabilityKind {
        match self {
            Self::SelectOption(_) => SelectOptionTool::CAPABILITY,
            Self::AssertEqual(_) => AssertEqualTool::CAPABILITY,
            Self::Click(_) => ClickTool::CAPABILITY,
            Self::Fill(_) => FillTool::CAPABILITY,
            Self::SetChecked(_) => SetCheckedTool::CAPABILITY,
            Self::GetValue(_) => GetValueTool::CAPABILITY,
            Self::GetText(_) => GetTextTool::CAPABILITY,
            Self::AssertValue(_) => AssertValueTool::CAPABILITY,
        }
    }

    pub fn spec(&self) -> ToolSpec {
        match self {
            Self::SelectOption(tool) => tool.spec(),
            Self::AssertEqual(tool) => tool.spec(),
            Self::Click(tool) => tool.spec(),
            Self::Fill(tool) => tool.spec(),
            Self::SetChecked(tool) => tool.spec(),
            Self::GetValue(tool) => tool.spec(),
            Self::GetText(tool) => tool.spec(),
            Self::AssertValue(tool) => tool.spec(),
        }
    }

    /// Validate `raw`, execute against `page` and serialize the result.
    pub async fn call<P: Page>(&self, page: &P, raw: &str) -> Result<Value> {
        match self {
            Self::SelectOption(tool) => invoke(tool, page, raw).await,
            Self::AssertEqual(tool) => invoke(tool, page, raw).await,
            Self::Click(tool) => invoke(tool, page, raw).await,
            Self::Fill(tool) => invoke(tool, page, raw).await,
            Self::SetChecked(tool) => invoke(tool, page, raw).await,
            Self::GetValue(tool) => invoke(tool, page, raw).await,
            Self::GetText(tool) => invoke(tool, page, raw).await,
            Self::AssertValue(tool) => invoke(tool, page, raw).await,
        }
    }
}

async fn invoke<T: Tool, P: Page>(tool: &T, page: &P, raw: &str) -> Result<Value> {
    let args = tool.validate(raw)?;
    let output = tool.execute(page, args).await?;
    serde_json::to_value(output)
        .map_err(|e| ToolError::Execution(format!("serialize result: {e}")))
}

macro_rules! impl_from_tool {
    ($($variant:ident => $tool:ty),* $(,)?) => {
        $(
            impl From<$tool> for BuiltinTool {
                fn from(tool: $tool) -> Self {
                    Self::$variant(tool)
                }
            }
        )*
    };
}

impl_from_tool! {
    SelectOption => SelectOptionTool,
    AssertEqual => AssertEqualTool,
    Click => ClickTool,
    Fill => FillTool,
    SetChecked => SetCheckedTool,
    GetValue => GetValueTool,
    GetText => GetTextTool,
    AssertValue => AssertValueTool,
}

/// Immutable-after-startup mapping from tool name to tool.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    tools: HashMap<&'static str, BuiltinTool>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every built-in tool.
    pub fn builtin(resolver: &Resolver) -> std::result::Result<Self, RegistryError> {
        let mut registry = Self::new();
        for tool in BuiltinTool::all(resolver) {
            registry.register(tool)?;
        }
        Ok(registry)
    }

    /// Add a tool. Names must be unique.
    pub fn register(
        &mut self,
        tool: impl Into<BuiltinTool>,
    ) -> std::result::Result<(), RegistryError> {
        let tool = tool.into();
        let name = tool.name();
        if self.tools.contains_key(name) {
            return Err(RegistryError::Duplicate(name.to_string()));
        }
        self.tools.insert(name, tool);
        Ok(())
    }

    /// Builder form of [`register`](Self::register).
    pub fn with(mut self, tool: impl Into<BuiltinTool>) -> std::result::Result<Self, RegistryError> {
        self.register(tool)?;
        Ok(self)
    }

    pub fn get(&self, name: &str) -> Option<&BuiltinTool> {
        self.tools.get(name)
    }

    /// Like [`get`](Self::get), reporting absence as [`ToolError::UnknownTool`].
    pub fn lookup(&self, name: &str) -> Result<&BuiltinTool> {
        self.get(name)
            .ok_or_else(|| ToolError::UnknownTool(name.to_string()))
    }

    /// Declarations of every registered tool, sorted by name.
    pub fn specs(&self) -> Vec<ToolSpec> {
        let mut specs: Vec<ToolSpec> = self.tools.values().map(BuiltinTool::spec).collect();
        specs.sort_by(|a, b| a.name.cmp(&b.name));
        specs
    }

    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.tools.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
