pub mod calculation;
pub mod castle_level;
pub mod castle_unlock;
pub mod hero;
pub mod pet;
