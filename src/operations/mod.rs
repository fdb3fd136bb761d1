pub mod add;
pub mod remove;
pub mod reset;
pub mod total;
pub mod update;
pub mod view;
