pub mod social {
    pub mod circles;
    pub mod closure;
    pub mod error;
    pub mod export;
    pub mod macros;
    pub mod recommend;
    pub mod relation;
    pub mod report;
    pub mod settings;
    pub mod snapshot;
    pub mod user;
    pub mod utils;
    pub mod vertex;
}

pub use social::circles::{circles, Circle, CircleMethod};
pub use social::closure::ClosureEngine;
pub use social::recommend::{recommend, recommend_with_depth};
pub use social::relation::RelationStore;
pub use social::user::User;
