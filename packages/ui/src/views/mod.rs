mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod activities_page;
pub use activities_page::ActivitiesPage;
