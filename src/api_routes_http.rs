use crate::session_middleware::SessionMiddleware;
use actix_web::web::{self, Data};
use commune_api::{
  community::{add_mod::add_mod_to_community, remove_mod::remove_mod_from_community},
  person::list_candidates::list_moderator_candidates,
};
use commune_api_common::context::CommuneContext;
use commune_api_crud::community::{
  create::create_community, delete::delete_community, list::list_communities, read::get_community,
  update::update_community,
};

pub fn config(cfg: &mut web::ServiceConfig, context: &CommuneContext) {
  cfg.service(
    web::scope("/api/admin")
      .wrap(SessionMiddleware::new(context.clone()))
      .app_data(Data::new(context.clone()))
      // Community management
      .route("/communities", web::get().to(list_communities))
      .service(
        web::scope("/community")
          .route("", web::post().to(create_community))
          .route("/{id}", web::get().to(get_community))
          .route("/{id}", web::put().to(update_community))
          .route("/{id}", web::delete().to(delete_community)),
      )
      // Moderator management
      .route("/moderators", web::get().to(list_moderator_candidates))
      .route("/add-moderators", web::patch().to(add_mod_to_community))
      .route(
        "/remove-moderators",
        web::patch().to(remove_mod_from_community),
      ),
  );
}
