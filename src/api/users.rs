use http::Method;

use crate::client::Verb;
use crate::endpoint::Endpoint;
use crate::models::user::{User, UserChange, UserList};
use crate::{ApiResult, PanelClient};

/// Provides methods for managing panel users.
///
/// The panel never returns passwords; they can only be set through
/// [`UserHandler::create`] and [`UserHandler::update`].
#[derive(Debug)]
pub struct UserHandler {
    client: PanelClient,
}

impl UserHandler {
    pub(crate) fn new(client: PanelClient) -> Self {
        Self { client }
    }

    /// Lists users, one page at a time.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use panel_client::PanelClient;
    /// #
    /// # async fn example(client: &PanelClient) -> Result<(), panel_client::ApiError> {
    /// let mut page = 1;
    /// loop {
    ///     let users = client.users().list().page(page).send().await?;
    ///     for user in users.attributes() {
    ///         println!("{user}");
    ///     }
    ///     match users.meta.next_page() {
    ///         Some(next) => page = next,
    ///         None => break,
    ///     }
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn list(&self) -> ListUsersBuilder {
        ListUsersBuilder::new(self.client.clone())
    }

    /// Fetches a single user by panel id.
    pub async fn get(&self, id: u64) -> ApiResult<User> {
        self.client
            .request(Method::GET, &Endpoint::user(id), None::<()>)
            .await
    }

    /// Fetches a single user by the external id assigned at creation.
    ///
    /// Empty, `.` and `..` ids fail with [`crate::ApiError::InvalidEndpoint`]
    /// without contacting the panel.
    pub async fn get_by_external(&self, external_id: &str) -> ApiResult<User> {
        let endpoint = Endpoint::user_by_external(external_id)?;
        self.client
            .request(Method::GET, &endpoint, None::<()>)
            .await
    }

    /// Creates a user. Username, email, first and last name are required by
    /// the panel.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use panel_client::{PanelClient, UserChange};
    /// #
    /// # async fn example(client: &PanelClient) -> Result<(), panel_client::ApiError> {
    /// let user = client
    ///     .users()
    ///     .create(
    ///         UserChange::builder()
    ///             .username("codeco")
    ///             .email("codeco@file.properties")
    ///             .first_name("Rihan")
    ///             .last_name("Arfan")
    ///             .build(),
    ///     )
    ///     .await?;
    /// println!("Created user #{}", user.attributes.id);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create(&self, change: UserChange) -> ApiResult<User> {
        self.client
            .request(Method::POST, &Endpoint::users(), Some(change))
            .await
    }

    /// Updates a user. Ids and timestamps cannot be changed.
    pub async fn update(&self, id: u64, change: UserChange) -> ApiResult<User> {
        self.client
            .request(Method::PATCH, &Endpoint::user(id), Some(change))
            .await
    }

    /// Deletes a user.
    pub async fn delete(&self, id: u64) -> ApiResult<()> {
        self.client
            .request_empty(&Endpoint::user(id), Verb::Delete)
            .await
    }
}

#[derive(Debug, Clone)]
pub struct ListUsersBuilder {
    client: PanelClient,
    page: Option<u32>,
    per_page: Option<u32>,
}

impl ListUsersBuilder {
    pub(crate) fn new(client: PanelClient) -> Self {
        Self {
            client,
            page: None,
            per_page: None,
        }
    }

    /// Request a specific 1-based page.
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    pub async fn send(self) -> ApiResult<UserList> {
        let mut endpoint = Endpoint::users();
        if let Some(page) = self.page {
            endpoint = endpoint.query("page", page);
        }
        if let Some(per_page) = self.per_page {
            endpoint = endpoint.query("per_page", per_page);
        }

        self.client
            .request(Method::GET, &endpoint, None::<()>)
            .await
    }
}
