pub mod launch;
pub mod planet;
