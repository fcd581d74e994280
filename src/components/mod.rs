pub mod analytics_panel;
pub mod menu_grid;
pub mod review_form;
pub mod reviews_list;
