//! Marketing site components

mod nav;
mod footer;
mod cards;
mod carousel;
mod application_dialog;
mod confirmation;

pub use nav::MarketingNav;
pub use footer::Footer;
pub use cards::*;
pub use carousel::{ImageCarousel, Slide};
pub use application_dialog::ApplicationDialog;
pub use confirmation::ConfirmationToast;
