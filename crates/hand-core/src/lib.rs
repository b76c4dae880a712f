pub mod app;
pub mod camera;
pub mod constants;
pub mod controls;
pub mod error;
pub mod geometry;
pub mod hand;
pub mod interaction;
pub mod raycast;
pub mod scene;
pub mod stage;

pub use app::App;
pub use camera::{PerspectiveCamera, Viewport};
pub use controls::{CameraControls, OrbitControls, StaticControls};
pub use error::SetupError;
pub use hand::{Finger, Hand};
pub use interaction::DragState;
pub use scene::{NodeId, SceneGraph};
pub use stage::Stage;
