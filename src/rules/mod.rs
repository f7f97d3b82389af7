//! Game rules for X-Rudder
//!
//! Placement and relocation legality live on [`Board`](crate::board::Board)
//! itself. This module adds the win condition: the X pattern and its
//! strike-through exception.

pub mod win;
