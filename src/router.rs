use crate::content::services::{self, Service};
use crate::domain::catalog;
use crate::domain::contact::{ContactForm, ContactPhase};
use crate::domain::filter::FilteredProperty;
use crate::domain::listing::ListingsView;
use crate::domain::nav::NavState;
use crate::errors::ServerError;
use crate::query::parse_listings_query;
use crate::responses::{assets, html_response, html_response_with_status, json_response, ResultResp};
use crate::state::AppState;
use crate::templates::pages;
use astra::Request;
use serde::Serialize;
use std::io::Read;

/// Largest contact form body we accept.
const MAX_FORM_BYTES: u64 = 16 * 1024;

/// Every page the site can show. Unknown paths land on `UnderConstruction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Home,
    Services,
    PropertySales,
    PropertyRentals,
    PropertyManagement,
    PropertyMarketing,
    InvestmentConsulting,
    LegalSupport,
    Listings,
    About,
    Contact,
    UnderConstruction,
}

const ROUTES: [(&str, View); 11] = [
    ("/", View::Home),
    ("/services", View::Services),
    ("/services/property-sales", View::PropertySales),
    ("/services/rentals", View::PropertyRentals),
    ("/services/property-management", View::PropertyManagement),
    ("/services/marketing", View::PropertyMarketing),
    ("/services/investment-consulting", View::InvestmentConsulting),
    ("/services/legal-support", View::LegalSupport),
    ("/listings", View::Listings),
    ("/about", View::About),
    ("/contact", View::Contact),
];

impl View {
    /// Exact match against the known paths; no prefixes, no trailing-slash folding.
    pub fn from_path(path: &str) -> View {
        ROUTES
            .iter()
            .find(|(route, _)| *route == path)
            .map(|(_, view)| *view)
            .unwrap_or(View::UnderConstruction)
    }

    pub fn path(self) -> Option<&'static str> {
        ROUTES
            .iter()
            .find(|(_, view)| *view == self)
            .map(|(route, _)| *route)
    }

    pub fn service(self) -> Option<&'static Service> {
        match self {
            View::PropertySales => Some(&services::PROPERTY_SALES),
            View::PropertyRentals => Some(&services::PROPERTY_RENTALS),
            View::PropertyManagement => Some(&services::PROPERTY_MANAGEMENT),
            View::PropertyMarketing => Some(&services::PROPERTY_MARKETING),
            View::InvestmentConsulting => Some(&services::INVESTMENT_CONSULTING),
            View::LegalSupport => Some(&services::LEGAL_SUPPORT),
            _ => None,
        }
    }
}

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str().to_owned();
    let path = req.uri().path().to_owned();
    let query = req.uri().query().unwrap_or_default().to_owned();

    match (method.as_str(), path.as_str()) {
        ("GET", "/static/main.css") => assets::stylesheet(),
        ("GET", "/healthz") => assets::plain_text("ok"),

        ("GET", "/listings/results") => {
            let view = listings_view(&query);
            html_response(pages::listings::results_panel(&view))
        }
        ("GET", "/api/listings") => listings_json(&query),

        ("GET", "/contact/form") => html_response(pages::contact::contact_panel(
            &ContactForm::default(),
            ContactPhase::Idle,
            &[],
        )),
        ("POST", "/contact") => submit_contact(req, state),

        ("GET", _) => render_view(View::from_path(&path), &path, &query),

        _ if View::from_path(&path) != View::UnderConstruction => Err(ServerError::MethodNotAllowed),
        _ => Err(ServerError::NotFound),
    }
}

fn render_view(view: View, path: &str, query: &str) -> ResultResp {
    let nav = NavState::for_path(path);

    if let Some(service) = view.service() {
        return html_response(pages::service_detail::service_detail_page(&nav, service));
    }

    match view {
        View::Home => html_response(pages::home::home_page(&nav)),
        View::Services => html_response(pages::services::services_page(&nav)),
        View::Listings => html_response(pages::listings::listings_page(&nav, &listings_view(query))),
        View::About => html_response(pages::about::about_page(&nav)),
        View::Contact => html_response(pages::contact::contact_page(
            &nav,
            &ContactForm::default(),
            ContactPhase::Idle,
            &[],
        )),
        View::UnderConstruction => {
            html_response_with_status(404, pages::under_construction::under_construction_page(&nav))
        }
        // Service views returned above.
        _ => Err(ServerError::InternalError),
    }
}

fn listings_view(query: &str) -> ListingsView<'static> {
    let (criteria, reveal) = parse_listings_query(query);
    ListingsView::with_state(catalog::listings(), criteria, reveal)
}

#[derive(Serialize)]
struct ListingsPayload<'a> {
    total: usize,
    show: usize,
    filters_applied: usize,
    properties: &'a [FilteredProperty],
}

fn listings_json(query: &str) -> ResultResp {
    let view = listings_view(query);
    json_response(&ListingsPayload {
        total: view.total(),
        show: view.reveal().threshold(),
        filters_applied: view.criteria().applied_count(),
        properties: view.visible(),
    })
}

fn submit_contact(req: Request, state: &AppState) -> ResultResp {
    let from_htmx = is_htmx(&req);
    let body = read_form_body(req)?;
    let form = ContactForm::from_pairs(url::form_urlencoded::parse(body.as_bytes()));
    let reset_after = state.config.contact_reset_after;

    let missing = form.missing_fields();
    if !missing.is_empty() {
        tracing::debug!(?missing, "contact form rejected");
        return if from_htmx {
            // htmx only swaps 2xx responses, so the partial goes out as 200.
            html_response(pages::contact::contact_panel(&form, ContactPhase::Idle, &missing))
        } else {
            let nav = NavState::for_path("/contact");
            html_response_with_status(
                400,
                pages::contact::contact_page(&nav, &form, ContactPhase::Idle, &missing),
            )
        };
    }

    let receipt = state.contact_desk.submit(&form)?;
    tracing::debug!(name = %receipt.name, email = %receipt.email, "contact request accepted");

    let phase = ContactPhase::Submitted { reset_after };
    let cleared = ContactForm::default();
    if from_htmx {
        html_response(pages::contact::contact_panel(&cleared, phase, &[]))
    } else {
        let nav = NavState::for_path("/contact");
        html_response(pages::contact::contact_page(&nav, &cleared, phase, &[]))
    }
}

fn is_htmx(req: &Request) -> bool {
    req.headers()
        .get("HX-Request")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.eq_ignore_ascii_case("true"))
}

fn read_form_body(req: Request) -> Result<String, ServerError> {
    let mut body = String::new();
    req.into_body()
        .reader()
        .take(MAX_FORM_BYTES + 1)
        .read_to_string(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("unreadable form body: {e}")))?;

    if body.len() as u64 > MAX_FORM_BYTES {
        return Err(ServerError::PayloadTooLarge);
    }
    Ok(body)
}
