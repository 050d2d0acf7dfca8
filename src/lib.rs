pub mod modules {
    pub mod activities {
        pub mod core {
            pub mod activity;
            pub mod catalog;
            pub mod decision;
            pub mod errors;
            pub mod events;
            pub mod evolve;
        }
        pub mod use_cases {
            pub mod errors;
            pub mod transaction;
            pub mod list_activities {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
                pub mod projection;
                pub mod queries_port;
            }
            pub mod get_activity {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod sign_up_for_activity {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod unregister_from_activity {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod http_responses;
            }
            pub mod outbound {
                pub mod activity_store;
                pub mod activity_store_in_memory;
            }
        }
    }
}

pub mod shell;
