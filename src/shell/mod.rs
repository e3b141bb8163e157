// Composition root for the grooming log host.
//
// Responsibilities
// - Read config from the environment.
// - Instantiate the file storage and wire it into the store's persistence hook.
// - Render the derived views as plain text.

pub mod config;
pub mod render;
pub mod state;
