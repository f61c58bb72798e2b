pub mod get_orderer_info;
pub mod get_user_orders;
pub mod sign_in;
pub mod update_shipping;
