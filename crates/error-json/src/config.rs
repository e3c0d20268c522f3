/// Serializer configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SerializerConfig {
    /// Maximum container nesting copied from property values. Deeper
    /// containers are replaced with `null`.
    pub max_depth: usize,
}

pub const DEFAULT_MAX_DEPTH: usize = 128;

impl Default for SerializerConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
