use anyhow::Result;

/// Trait for building configuration structs.
///
/// Implementations read the process environment (or any other source) and
/// return a fully validated configuration. It is built once at startup and
/// passed down explicitly, never stored in a process-wide singleton.
pub trait ConfigBuilder: Clone + Send + Sync + 'static {
    fn build() -> Result<Self>;
}
