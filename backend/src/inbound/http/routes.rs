//! Route table for the resource endpoints.
//!
//! [`ApiRoutes`] is built once at startup and cloned into every worker's
//! application factory. Each path answers unsupported methods with a JSON
//! 405; [`default_service`] covers unknown paths with a JSON 404.

use actix_web::web;

use super::resources::{method_not_allowed, not_found};
use super::{tasks, users};
use crate::domain::{NaturalKeyResource, ResourceService, TaskResource, UserResource};

/// One service per resource, ready to be mounted on an `App`.
#[derive(Clone)]
pub struct ApiRoutes {
    users: web::Data<ResourceService<UserResource>>,
    tasks: web::Data<ResourceService<TaskResource>>,
}

impl ApiRoutes {
    /// Bundle the user and task services.
    pub fn new(
        users: ResourceService<UserResource>,
        tasks: ResourceService<TaskResource>,
    ) -> Self {
        Self {
            users: web::Data::new(users),
            tasks: web::Data::new(tasks),
        }
    }

    /// Register collection and item routes for both resources.
    ///
    /// # Examples
    /// ```ignore
    /// let routes = ApiRoutes::new(users, tasks);
    /// let app = App::new().configure(|cfg| routes.configure(cfg));
    /// ```
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(self.users.clone())
            .app_data(self.tasks.clone())
            .service(
                web::resource(UserResource::ROUTE)
                    .name("users")
                    .route(web::get().to(users::list_users))
                    .route(web::post().to(users::create_user))
                    .default_service(web::to(method_not_allowed)),
            )
            .service(
                web::resource(UserResource::item_route())
                    .name("user")
                    .route(web::get().to(users::get_user))
                    .route(web::delete().to(users::delete_user))
                    .route(web::put().to(users::update_user))
                    .default_service(web::to(method_not_allowed)),
            )
            .service(
                web::resource(TaskResource::ROUTE)
                    .name("tasks")
                    .route(web::get().to(tasks::list_tasks))
                    .route(web::post().to(tasks::create_task))
                    .default_service(web::to(method_not_allowed)),
            )
            .service(
                web::resource(TaskResource::item_route())
                    .name("task")
                    .route(web::get().to(tasks::get_task))
                    .route(web::delete().to(tasks::delete_task))
                    .route(web::put().to(tasks::update_task))
                    .default_service(web::to(method_not_allowed)),
            );
    }
}

/// Application-level fallback for paths outside the route table.
#[must_use]
pub fn default_service() -> actix_web::Route {
    web::to(not_found)
}
