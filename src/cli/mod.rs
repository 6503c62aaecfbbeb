pub mod batch;
pub mod list;
pub mod run;
pub mod square;

pub use batch::*;
pub use list::*;
pub use run::*;
pub use square::*;
