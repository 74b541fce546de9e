//! Interaction state for the site's widgets.
//!
//! Hosts forward input events and elapsed time; nothing here reads a clock.

pub mod carousel;
pub mod compare_slider;
pub mod contact_form;
pub mod portfolio;
pub mod room_visualizer;
pub mod video_player;

pub use carousel::{Carousel, Direction, TransitionCarousel};
pub use compare_slider::{Bounds, CompareSlider};
pub use contact_form::{ContactDetails, ContactField, ContactForm, FieldError, Submission};
pub use portfolio::{PortfolioGallery, Project};
pub use room_visualizer::{RoomVisualizer, VisualizerOption, VisualizerTab};
pub use video_player::{Playback, PlayerCommand, VideoPlayer, format_time};
