mod fields;
mod footer;
mod mappings;
mod popup;

pub use fields::render_form;
pub use footer::render_footer;
pub use mappings::render_mapping_list;
pub use popup::render_popup;
