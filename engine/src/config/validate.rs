/// Gate applied to a configuration value both when it is loaded and before
/// it is stored.
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}
