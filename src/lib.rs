pub mod config;

pub mod modules {
    pub mod activities {
        pub mod core {
            pub mod policy;
            pub mod seed;
            pub mod state;
        }
        pub mod use_cases {
            pub mod sign_up {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod unregister {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_activities {
                pub mod inbound {
                    pub mod http;
                }
                pub mod projection;
                pub mod queries_port;
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod directory;
                pub mod directory_in_memory;
            }
        }
    }
}

pub mod shell;
