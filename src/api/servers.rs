use http::Method;

use crate::client::Verb;
use crate::endpoint::Endpoint;
use crate::models::server::{AllocationAttributes, Server, ServerChange, ServerList};
use crate::{ApiResult, PanelClient};

/// Provides methods for managing servers on the panel.
#[derive(Debug)]
pub struct ServerHandler {
    client: PanelClient,
}

impl ServerHandler {
    /// Creates a new server API instance.
    ///
    /// This method is intended for internal use by the panel client.
    pub(crate) fn new(client: PanelClient) -> Self {
        Self { client }
    }

    /// Lists servers, one page at a time.
    ///
    /// # Returns
    ///
    /// Returns a `ListServersBuilder` instance, which allows for setting
    /// the page before sending the request.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use panel_client::PanelClient;
    /// #
    /// # async fn example(client: &PanelClient) -> Result<(), panel_client::ApiError> {
    /// let page = client.servers().list().page(2).send().await?;
    ///
    /// for server in page.attributes() {
    ///     println!("{server}");
    /// }
    /// println!("page {} of {}", page.meta.pagination.current_page, page.meta.pagination.total_pages);
    /// # Ok(())
    /// # }
    /// ```
    pub fn list(&self) -> ListServersBuilder {
        ListServersBuilder::new(self.client.clone())
    }

    /// Fetches a single server.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use panel_client::PanelClient;
    /// #
    /// # async fn example(client: &PanelClient) -> Result<(), panel_client::ApiError> {
    /// let server = client.servers().get(42).await?;
    /// println!("{} is owned by user {}", server.attributes.name, server.attributes.user);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get(&self, id: u64) -> ApiResult<Server> {
        self.client
            .request(Method::GET, &Endpoint::server(id), None::<()>)
            .await
    }

    /// Returns the network allocations assigned to a server.
    pub async fn allocations(&self, id: u64) -> ApiResult<Vec<AllocationAttributes>> {
        let server: Server = self
            .client
            .request(Method::GET, &Endpoint::server_with_allocations(id), None::<()>)
            .await?;

        Ok(server.attributes.relationships.allocations.into_attributes())
    }

    /// Creates a server. The panel requires at least a name, owner, egg,
    /// docker image, startup command, limits and an allocation.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use panel_client::{PanelClient, ServerChange, ServerFeatureLimits, ServerLimits};
    /// #
    /// # async fn example(client: &PanelClient) -> Result<(), panel_client::ApiError> {
    /// let change = ServerChange::builder()
    ///     .name("Survival")
    ///     .user(1)
    ///     .egg(5)
    ///     .docker_image("quay.io/pterodactyl/core:java")
    ///     .startup("java -Xms128M -Xmx{{SERVER_MEMORY}}M -jar {{SERVER_JARFILE}}")
    ///     .env("SERVER_JARFILE", "server.jar")
    ///     .limits(ServerLimits { memory: 1024, disk: 4096, io: 500, ..Default::default() })
    ///     .feature_limits(ServerFeatureLimits::default())
    ///     .default_allocation(17)
    ///     .build();
    ///
    /// let server = client.servers().create(change).await?;
    /// println!("Created {}", server.attributes.uuid);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create(&self, change: ServerChange) -> ApiResult<Server> {
        self.client
            .request(Method::POST, &Endpoint::servers(), Some(change))
            .await
    }

    /// Updates name, owner, external id and description.
    pub async fn update_details(&self, id: u64, change: ServerChange) -> ApiResult<Server> {
        self.client
            .request(Method::PATCH, &Endpoint::server_details(id), Some(change))
            .await
    }

    /// Updates limits, feature limits and allocations.
    pub async fn update_build(&self, id: u64, change: ServerChange) -> ApiResult<Server> {
        self.client
            .request(Method::PATCH, &Endpoint::server_build(id), Some(change))
            .await
    }

    /// Updates the startup command, egg, image and environment.
    pub async fn update_startup(&self, id: u64, change: ServerChange) -> ApiResult<Server> {
        self.client
            .request(Method::PATCH, &Endpoint::server_startup(id), Some(change))
            .await
    }

    /// Deletes a server.
    pub async fn delete(&self, id: u64) -> ApiResult<()> {
        self.client
            .request_empty(&Endpoint::server(id), Verb::Delete)
            .await
    }
}

#[derive(Debug, Clone)]
pub struct ListServersBuilder {
    client: PanelClient,
    page: Option<u32>,
    per_page: Option<u32>,
}

impl ListServersBuilder {
    pub(crate) fn new(client: PanelClient) -> Self {
        Self {
            client,
            page: None,
            per_page: None,
        }
    }

    /// Request a specific 1-based page. Defaults to the first page.
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Number of servers per page. The panel applies its own default when
    /// not set.
    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    pub async fn send(self) -> ApiResult<ServerList> {
        let mut endpoint = Endpoint::servers();
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
