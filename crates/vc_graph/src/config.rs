use crate::node::DEFAULT_ROOT_TAG;

// -----------------------------------------------------------------------------
// UnknownFieldPolicy

/// What the deserializer does with a field node no class field matches.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnknownFieldPolicy {
    /// Fail with [`GraphError::UnknownField`](crate::GraphError::UnknownField).
    #[default]
    Reject,
    /// Log a warning and ignore the node.
    Skip,
}

// -----------------------------------------------------------------------------
// GraphConfig

/// Options shared by serialize and deserialize calls.
///
/// # Examples
///
/// ```
/// use vc_graph::{GraphConfig, UnknownFieldPolicy};
///
/// let config = GraphConfig::new()
///     .with_root_tag("save")
///     .with_unknown_fields(UnknownFieldPolicy::Skip);
///
/// assert_eq!(config.root_tag(), "save");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphConfig {
    root_tag: String,
    unknown_fields: UnknownFieldPolicy,
}

impl Default for GraphConfig {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl GraphConfig {
    /// The default configuration: root tag `data`, unknown fields rejected.
    pub fn new() -> Self {
        Self {
            root_tag: String::from(DEFAULT_ROOT_TAG),
            unknown_fields: UnknownFieldPolicy::Reject,
        }
    }

    /// Sets the name of the root node.
    #[inline]
    pub fn with_root_tag(mut self, root_tag: impl Into<String>) -> Self {
        self.root_tag = root_tag.into();
        self
    }

    #[inline]
    pub fn with_unknown_fields(mut self, policy: UnknownFieldPolicy) -> Self {
        self.unknown_fields = policy;
        self
    }

    #[inline]
    pub fn root_tag(&self) -> &str {
        &self.root_tag
    }

    #[inline]
    pub fn unknown_fields(&self) -> UnknownFieldPolicy {
        self.unknown_fields
    }
}
