mod boot_button;

pub use boot_button::bind_stop_button;
