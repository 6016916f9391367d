pub(crate) mod files;
pub(crate) mod popup;
pub(crate) mod sidebar;
