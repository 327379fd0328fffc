/// Main configuration module.
/// 
/// Re-exports submodules for match rules and the headless demo driver.
pub mod game;
pub mod demo;
