pub mod ecdf_txt;
