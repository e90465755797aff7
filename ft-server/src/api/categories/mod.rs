pub mod categories;
pub mod category_dto;
pub mod category_list_response;
pub mod category_response;
pub mod create_category_request;
