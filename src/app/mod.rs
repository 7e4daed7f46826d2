pub mod debounce;
pub mod events;
pub mod state;
