//! Location picker: geocoder search plus click-to-centre on the map surface.
//!
//! Tiles are drawn by the map vendor layer behind `.map-picker__surface`;
//! this component only turns clicks and search picks into `map:center`
//! requests.

use leptos::prelude::*;

use crate::app::FrameSender;
use crate::net::frame_client::frame_client_requests::{geocode_request, map_center_request};
use crate::net::types::LngLat;
use crate::state::map::MapState;

const SEARCH_PLACEHOLDER: &str = "Where would you like to go?";

fn publish_center(map: RwSignal<MapState>, sender: RwSignal<FrameSender>, point: LngLat) {
    let mut center = point;
    map.update(|m| center = m.select_center(point));
    if !sender.get_untracked().send(&map_center_request(center)) {
        leptos::logging::warn!("map: center not sent, no connection");
    }
}

#[component]
pub fn MapLocationPicker() -> impl IntoView {
    let map = expect_context::<RwSignal<MapState>>();
    let sender = expect_context::<RwSignal<FrameSender>>();
    let surface_ref = NodeRef::<leptos::html::Div>::new();

    let on_query_input = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        map.update(|m| m.query = value);
    };

    let on_query_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() != "Enter" {
            return;
        }
        ev.prevent_default();
        let Some(query) = map.with_untracked(|m| m.search_query().map(str::to_owned)) else {
            return;
        };
        if !sender.get_untracked().send(&geocode_request(&query)) {
            leptos::logging::warn!("map: geocode not sent, no connection");
        }
    };

    let on_surface_click = move |ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        {
            let Some(el) = surface_ref.get_untracked() else {
                return;
            };
            let rect = el.get_bounding_client_rect();
            let px = f64::from(ev.client_x()) - rect.left();
            let py = f64::from(ev.client_y()) - rect.top();
            let point = map.with_untracked(|m| m.viewport.unproject(px, py, rect.width(), rect.height()));
            publish_center(map, sender, point);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ev, surface_ref);
        }
    };

    let results = move || {
        map.with(|m| m.results.clone())
            .into_iter()
            .map(|result| {
                let center = result.center;
                view! {
                    <li class="map-picker__result" on:click=move |_| publish_center(map, sender, center)>
                        {result.name}
                    </li>
                }
            })
            .collect_view()
    };

    let position = move || {
        map.with(|m| {
            format!(
                "{:.4}, {:.4} @ z{}",
                m.viewport.latitude, m.viewport.longitude, m.viewport.zoom
            )
        })
    };

    view! {
        <div class="map-picker">
            <div class="map-picker__search">
                <input
                    class="map-picker__query"
                    type="text"
                    placeholder=SEARCH_PLACEHOLDER
                    prop:value=move || map.with(|m| m.query.clone())
                    on:input=on_query_input
                    on:keydown=on_query_keydown
                />
                <ul class="map-picker__results">{results}</ul>
            </div>
            <div class="map-picker__surface" node_ref=surface_ref on:click=on_surface_click>
                <span class="map-picker__position">{position}</span>
                <Show when=move || map.with(|m| m.selected.is_some())>
                    <span class="map-picker__marker"></span>
                </Show>
            </div>
        </div>
    }
}
