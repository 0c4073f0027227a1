pub mod shade_view;
