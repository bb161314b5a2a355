/// Codec configuration for hiding messages
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct CodecOptions {
    /// decides how a message length is checked against the pixel buffer before hiding
    pub capacity: CapacityPolicy,
}

impl CodecOptions {
    pub fn with_capacity_policy(mut self, capacity: CapacityPolicy) -> Self {
        self.capacity = capacity;
        self
    }
}

/// How much room a message is assumed to need
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub enum CapacityPolicy {
    /// `pixels > 4 + 8 * message length`, the check earlier releases of the tool
    /// performed. It undercounts, hiding still refuses what does not fit.
    #[default]
    Compatible,
    /// `pixels >= 96 + 24 * message length`, the number of bytes actually touched
    Strict,
}
