pub mod algorithms; 
pub mod config; 
pub mod errors; 
pub mod report; 
pub mod traits;
pub use traits::Interpolator;

pub mod sample_set; 
pub mod spacing; 
pub mod grid; 

pub mod lagrange; 
pub mod divided; 
pub mod finite; 
pub mod forward; 
pub mod backward; 
pub mod router;

pub(crate) mod display;
