pub mod broadcast;
pub mod posting;
pub mod taxonomy;
