use super::{QueryOptions, SpotifyClient, client::segment};
use crate::{
    error::Result,
    transport::Transport,
    types::{Category, Paging},
    validate,
};

impl<T: Transport> SpotifyClient<T> {
    /// `GET /browse/categories`
    pub async fn get_several_browse_categories(
        &self,
        token: &str,
        opts: &QueryOptions,
    ) -> Result<Paging<Category>> {
        validate::token(token)?;
        opts.validate()?;

        self.get_enveloped_page(
            "browse/categories",
            "categories",
            opts,
            token,
            Category::from_json,
        )
        .await
    }

    /// `GET /browse/categories/{id}`
    pub async fn get_single_browse_category(
        &self,
        category_id: &str,
        token: &str,
        opts: &QueryOptions,
    ) -> Result<Category> {
        validate::id(category_id, "category_id")?;
        validate::token(token)?;
        opts.validate()?;

        self.get_parsed(
            &format!("browse/categories/{}", segment(category_id)),
            opts,
            token,
            Category::from_json,
        )
        .await
    }
}
