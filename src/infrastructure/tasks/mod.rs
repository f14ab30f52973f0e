pub(crate) mod http_server;
pub(crate) mod network;

pub use http_server::http_server_task;
pub use network::{
    connected_clients,
    dhcp_server_task,
    network_runner_task,
    wifi_ap_task,
};
