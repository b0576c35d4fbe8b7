pub mod attendance;
pub mod stamp;
pub mod stamp_action;
pub mod work_status;
