//! Generic list screen: fetch, search, status filter, summary cards and table
//!
//! Every management page is a [`Resource`] implementation plus whatever
//! modals its row actions open.

use crate::api_client::ApiClient;
use crate::components::data_table::DataTable;
use crate::components::loading::{LoadFailed, Loading};
use crate::components::modal::{DetailRow, Modal};
use crate::components::summary_cards::{Stat, SummaryCards};
use crate::data_view::{ActionKind, Cell, Column, DataView};
use crate::filter::{self, ListQuery, Searchable, StatusFilter, StatusOption};
use crate::resource::{CollectionState, LoadState};
use crate::state::use_api;
use crate::toast::{Toaster, use_toaster};
use delivery_admin_core::Result;
use delivery_admin_core::types::StatusMessage;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::future::Future;

/// Where the records of a screen come from
pub enum DataSource<R> {
    /// `GET` on this backend path
    Remote(&'static str),
    /// Built-in sample records
    Fixture(fn() -> Vec<R>),
}

/// A record type with its own management screen
pub trait Resource:
    Searchable + Serialize + DeserializeOwned + Clone + Send + Sync + 'static
{
    /// Page title
    const TITLE: &'static str;
    /// Line under the title
    const SUBTITLE: &'static str;
    /// Placeholder of the search box
    const SEARCH_PLACEHOLDER: &'static str;

    /// Record source
    fn source() -> DataSource<Self>;

    /// Table columns
    fn columns() -> Vec<Column>;

    /// Rich cell for a column; `None` shows the raw field
    fn render_cell(&self, _column: &Column) -> Option<Cell> {
        None
    }

    /// Status selector entries; empty hides the selector
    fn status_options() -> &'static [StatusOption] {
        &[]
    }

    /// Statistic cards computed from the loaded records
    fn summary(_records: &[Self]) -> Vec<Stat> {
        Vec::new()
    }

    /// Columns plus [`Resource::render_cell`]
    fn data_view() -> DataView<Self> {
        DataView::new(Self::columns()).with_formatter(Self::render_cell)
    }
}

/// Load the records of `R`
///
/// # Errors
///
/// Returns the request error of a remote source.
pub async fn fetch<R: Resource>(client: &ApiClient) -> Result<Vec<R>> {
    match R::source() {
        DataSource::Remote(path) => client.list(path).await,
        DataSource::Fixture(seed) => Ok(seed()),
    }
}

/// Reactive handle on the collection of one mounted screen
pub struct Collection<R: Send + Sync + 'static> {
    state: RwSignal<CollectionState<R>>,
    client: StoredValue<ApiClient>,
    toaster: Toaster,
}

impl<R: Send + Sync + 'static> Clone for Collection<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Send + Sync + 'static> Copy for Collection<R> {}

impl<R: Resource> Collection<R> {
    /// Collection bound to the app's client and toaster
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(CollectionState::default()),
            client: StoredValue::new(use_api()),
            toaster: use_toaster(),
        }
    }

    /// Underlying state
    #[must_use]
    pub const fn state(&self) -> RwSignal<CollectionState<R>> {
        self.state
    }

    /// Client used for requests
    #[must_use]
    pub fn client(&self) -> ApiClient {
        self.client.get_value()
    }

    /// Toaster used for notifications
    #[must_use]
    pub const fn toaster(&self) -> Toaster {
        self.toaster
    }

    /// Fetch the records; ignored while a mutation is in flight
    pub fn load(self) {
        let Some(Some(ticket)) = self.state.try_update(CollectionState::begin_load) else {
            tracing::debug!("{} refresh skipped", R::TITLE);
            return;
        };
        tracing::debug!("Loading {}", R::TITLE);

        let client = self.client.get_value();
        spawn_local(async move {
            let result = fetch::<R>(&client).await;
            let failure = result.as_ref().err().cloned();

            match self.state.try_update(|s| s.finish_load(ticket, result)) {
                Some(true) => {
                    if let Some(error) = failure {
                        self.toaster
                            .report(&format!("Failed to load {}", R::TITLE), &error);
                    }
                }
                Some(false) => tracing::warn!("Dropped stale {} response", R::TITLE),
                None => tracing::debug!("{} screen is gone, dropping response", R::TITLE),
            }
        });
    }

    /// Run a mutating request, then reload on success
    ///
    /// The success notification is the backend's `message`, falling back to
    /// `fallback`.
    pub fn mutate<F, Fut>(self, context: &'static str, fallback: &'static str, request: F)
    where
        F: FnOnce(ApiClient) -> Fut + 'static,
        Fut: Future<Output = Result<StatusMessage>> + 'static,
    {
        if self.state.try_update(CollectionState::begin_mutation) != Some(true) {
            self.toaster.info("Aguarde a operação em andamento.");
            return;
        }

        let client = self.client.get_value();
        spawn_local(async move {
            let result = request(client).await;
            if self.state.try_update(CollectionState::finish_mutation).is_none() {
                return;
            }

            match result {
                Ok(ack) => {
                    tracing::info!("{context} succeeded");
                    self.toaster
                        .success(ack.message.unwrap_or_else(|| fallback.to_string()));
                    self.load();
                }
                Err(e) => self.toaster.report(context, &e),
            }
        });
    }
}

impl<R: Resource> Default for Collection<R> {
    fn default() -> Self {
        Self::new()
    }
}

/// List screen for any [`Resource`]
#[component]
pub fn ResourceScreen<R: Resource>(
    /// Collection shown by the screen
    collection: Collection<R>,
    /// Row action handler
    #[prop(optional)]
    on_action: Option<Callback<(ActionKind, R)>>,
    /// Text of the header button, e.g. `Novo Entregador`
    #[prop(optional)]
    create_label: Option<&'static str>,
    /// Header button handler
    #[prop(optional)]
    on_create: Option<Callback<()>>,
    /// Extra content under the table
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let state = collection.state();
    let search = RwSignal::new(String::new());
    let status = RwSignal::new("all".to_string());

    let query = Signal::derive(move || ListQuery {
        search: search.get(),
        status: StatusFilter::from_selection(&status.get(), R::status_options()),
    });
    let visible = Signal::derive(move || state.with(|s| filter::apply(s.records(), &query.get())));
    let stats = Signal::derive(move || state.with(|s| R::summary(s.records())));
    let locked = Signal::derive(move || state.with(CollectionState::is_mutating));
    let refreshing = move || state.with(CollectionState::is_refreshing);

    collection.load();

    let dispatch = Callback::new(move |(index, kind): (usize, ActionKind)| {
        let Some(record) = visible.with_untracked(|rows| rows.get(index).cloned()) else {
            return;
        };
        if let Some(handler) = on_action {
            handler.run((kind, record));
        }
    });

    let view_model = R::data_view();
    let content = move || -> Result<AnyView> {
        let (has_data, load_state) = state.with(|s| (s.has_data(), s.state().clone()));
        if !has_data {
            return Ok(match load_state {
                LoadState::Failed(message) => view! {
                    <LoadFailed message=message on_retry=Callback::new(move |()| collection.load()) />
                }
                .into_any(),
                _ => view! { <Loading /> }.into_any(),
            });
        }

        let table = visible.with(|rows| view_model.project(rows))?;
        Ok(view! { <DataTable table=table on_action=dispatch locked=locked /> }.into_any())
    };

    let status_selector = (!R::status_options().is_empty()).then(|| {
        view! {
            <select
                class="status-filter"
                on:change=move |ev| status.set(event_target_value(&ev))
                prop:value=move || status.get()
            >
                <option value="all">"Todos"</option>
                {R::status_options()
                    .iter()
                    .map(|option| view! { <option value=option.value>{option.label}</option> })
                    .collect_view()}
            </select>
        }
    });

    let create_button = create_label.zip(on_create).map(|(label, handler)| {
        view! {
            <button class="btn btn-primary" on:click=move |_| handler.run(())>
                {label}
            </button>
        }
    });

    view! {
        <div class="resource-screen">
            <div class="page-header">
                <div>
                    <h1>{R::TITLE}</h1>
                    <p class="page-subtitle">{R::SUBTITLE}</p>
                </div>
                <div class="page-actions">
                    <button
                        class="btn btn-secondary"
                        prop:disabled=move || locked.get()
                        on:click=move |_| collection.load()
                    >
                        {move || if refreshing() { "Atualizando..." } else { "Atualizar" }}
                    </button>
                    {create_button}
                </div>
            </div>

            <SummaryCards stats=stats />

            <div class="filters">
                <input
                    class="search-input"
                    type="search"
                    placeholder=R::SEARCH_PLACEHOLDER
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                {status_selector}
            </div>

            {content}

            {children.map(|children| children())}
        </div>
    }
}

/// Read-only panel listing the columns of one record
#[component]
pub fn RecordDetail<R: Resource>(
    /// Dialog title
    #[prop(into)]
    title: String,
    /// Record shown
    record: R,
    /// Closes the panel
    on_close: Callback<()>,
) -> impl IntoView {
    let rows = R::data_view()
        .project(std::slice::from_ref(&record))
        .map(|table| {
            let cells = table
                .rows
                .into_iter()
                .next()
                .map(|row| row.cells)
                .unwrap_or_default();
            table
                .columns
                .into_iter()
                .zip(cells)
                .filter(|(_, cell)| !matches!(cell, Cell::Actions(_)))
                .map(|(column, cell)| {
                    view! { <DetailRow label=column.label value=cell.to_string() /> }
                })
                .collect_view()
        });

    view! { <Modal title=title on_close=on_close>{rows}</Modal> }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Sample {
        name: String,
        status: String,
    }

    impl Searchable for Sample {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.name.as_str()]
        }
    }

    impl Resource for Sample {
        const TITLE: &'static str = "Amostras";
        const SUBTITLE: &'static str = "Registros de teste";
        const SEARCH_PLACEHOLDER: &'static str = "Buscar...";

        fn source() -> DataSource<Self> {
            DataSource::Fixture(|| {
                vec![Sample {
                    name: "Primeira".to_string(),
                    status: "Ativo".to_string(),
                }]
            })
        }

        fn columns() -> Vec<Column> {
            vec![Column::new("name", "Nome"), Column::new("status", "Status")]
        }

        fn render_cell(&self, column: &Column) -> Option<Cell> {
            (column.key == "status").then(|| Cell::badge(&self.status, crate::data_view::Tone::Success))
        }
    }

    #[test]
    fn test_fixture_source_needs_no_backend() {
        let client = ApiClient::new("http://127.0.0.1:9");
        let records = block_on(fetch::<Sample>(&client)).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_data_view_uses_render_cell() {
        let records = block_on(fetch::<Sample>(&ApiClient::new("http://127.0.0.1:9"))).unwrap();
        let table = Sample::data_view().project(&records).unwrap();

        assert_eq!(
            table.rows.first().map(|row| row.cells.clone()),
            Some(vec![
                Cell::text("Primeira"),
                Cell::badge("Ativo", crate::data_view::Tone::Success)
            ])
        );
    }
}
