pub mod create_rule_request;
pub mod recurring;
pub mod rule_dto;
pub mod rule_list_response;
pub mod rule_response;
pub mod run_check_response;
