pub mod find_order;
pub mod product_list;
