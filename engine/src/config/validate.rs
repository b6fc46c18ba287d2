/// Structural validation, run after deserializing and before persisting.
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}
