pub mod media_list;
