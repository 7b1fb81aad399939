//! Domain types shared by the actors, the workflows and the terminals.

pub mod bill;
pub mod cart;
pub mod menu;
pub mod money;
pub mod order;
pub mod table;

pub use bill::*;
pub use cart::*;
pub use menu::*;
pub use money::*;
pub use order::*;
pub use table::*;
