pub mod backdrop;
pub mod cloud;
pub mod color;
pub mod constants;
pub mod error;
pub mod follow;
pub mod motion;
pub mod preset;
pub mod section;
pub mod shapes;
pub mod state;

pub static POINTS_WGSL: &str = include_str!("../../../shaders/points.wgsl");
pub static POST_WGSL: &str = include_str!("../../../shaders/post.wgsl");

pub use backdrop::{PostLook, SparkleField, Sparkles, StarField};
pub use cloud::PointCloud;
pub use color::Rgb;
pub use error::ParseError;
pub use follow::{smoothing_alpha, Follower};
pub use motion::{MotionProfile, Repulsion, Spin};
pub use preset::{Page, ScenePreset, Section};
pub use section::{PinnedTrack, SectionBounds, SectionTracker};
pub use shapes::{ShapeDescriptor, ShapeKind, Shimmer};
pub use state::Camera;
