// web_app/components/common.rs - Reusable UI components
//
// Small, stateless building blocks shared by every page. They receive all
// data via props.

use leptos::prelude::*;
use leptos::web_sys::KeyboardEvent;

/// Loading spinner component
///
/// Displays a centered spinner with optional message.
#[component]
pub fn Loading(
    /// Optional message to display below the spinner
    #[prop(default = "Loading...")]
    message: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center p-12">
            <div class="animate-spin rounded-full h-10 w-10 border-4 border-gray-200 border-t-blue-600"></div>
            <span class="mt-4 text-gray-500 font-medium animate-pulse">{message}</span>
        </div>
    }
}

/// Error panel for a failed load
#[component]
pub fn ErrorDisplay(
    /// The error message to display
    error: String,
    #[prop(default = "Something went wrong")]
    title: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-red-50 border border-red-200 rounded-xl p-6 flex items-start gap-4" role="alert">
            <div class="bg-red-100 p-2 rounded-full text-red-600">
                <span class="text-xl font-bold">"⚠"</span>
            </div>
            <div>
                <h3 class="text-red-800 font-bold mb-1">{title}</h3>
                <p class="text-red-600 text-sm">{error}</p>
            </div>
        </div>
    }
}

/// One-line message shown next to the control that failed
#[component]
pub fn InlineError(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.with(|m| m.is_some())>
            <p class="text-sm text-red-600 mt-2" role="alert">
                {move || message.get().unwrap_or_default()}
            </p>
        </Show>
    }
}

/// Primary button component
#[component]
pub fn Button(
    /// Button label text
    children: Children,
    /// Click handler
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    /// Whether the button is disabled
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
    /// Button type (submit, button, reset)
    #[prop(default = "button")]
    button_type: &'static str,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let base_class = "px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 \
                      transition-colors disabled:bg-gray-400 disabled:cursor-not-allowed \
                      font-medium shadow-sm active:transform active:scale-95";

    view! {
        <button
            type=button_type
            disabled=move || disabled.get()
            class=format!("{} {}", base_class, class)
            on:click=move |_| {
                if let Some(handler) = on_click {
                    handler.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

/// Secondary button component
#[component]
pub fn SecondaryButton(
    children: Children,
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
) -> impl IntoView {
    let class = "px-4 py-2 bg-white text-gray-700 rounded-lg hover:bg-gray-50 \
                 transition-colors border border-gray-300 disabled:opacity-50 \
                 font-medium shadow-sm active:bg-gray-100";

    view! {
        <button
            type="button"
            disabled=move || disabled.get()
            class=class
            on:click=move |_| {
                if let Some(handler) = on_click {
                    handler.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

/// Modal wrapper component
///
/// Provides the backdrop and frame. Open/close state belongs to the parent.
#[component]
pub fn ModalWrapper(
    /// Modal content
    children: Children,
    /// Callback when modal should close
    on_close: Callback<()>,
    /// Modal title
    #[prop(default = "")]
    title: &'static str,
) -> impl IntoView {
    let handle_keydown = move |ev: KeyboardEvent| {
        if ev.key() == "Escape" {
            on_close.run(());
        }
    };

    view! {
        <div
            class="fixed inset-0 z-50 flex items-center justify-center p-4 sm:p-6"
            on:keydown=handle_keydown
        >
            <div
                class="absolute inset-0 bg-gray-900/60 backdrop-blur-sm transition-opacity"
                on:click=move |_| on_close.run(())
            ></div>

            <div
                class="relative bg-white rounded-2xl shadow-2xl w-full max-w-3xl max-h-[90vh] flex flex-col overflow-hidden"
                on:click=|ev| ev.stop_propagation()
            >
                <div class="flex justify-between items-center px-6 py-4 border-b border-gray-100 bg-gray-50/50">
                    <h2 class="text-xl font-bold text-gray-800">{title}</h2>
                    <button
                        class="text-gray-400 hover:text-gray-600 hover:bg-gray-100 rounded-full p-2 transition-colors"
                        on:click=move |_| on_close.run(())
                        title="Close"
                    >
                        <svg class="w-6 h-6" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12"></path>
                        </svg>
                    </button>
                </div>

                <div class="p-6 overflow-y-auto custom-scrollbar">
                    {children()}
                </div>
            </div>
        </div>
    }
}

/// Badge component
///
/// A small badge/tag for displaying labels.
#[component]
pub fn Badge(
    children: Children,
    /// Badge color variant
    #[prop(default = "gray")]
    variant: &'static str,
) -> impl IntoView {
    view! {
        <span class=badge_class(variant)>
            {children()}
        </span>
    }
}

fn badge_class(variant: &str) -> &'static str {
    match variant {
        "green" => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-green-100 text-green-800 border border-green-200",
        "blue" => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-blue-100 text-blue-800 border border-blue-200",
        "yellow" => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-yellow-100 text-yellow-800 border border-yellow-200",
        _ => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-gray-100 text-gray-800 border border-gray-200",
    }
}

/// Text input bound to a signal
#[component]
pub fn TextInput(
    /// The current value
    value: RwSignal<String>,
    #[prop(default = "")]
    placeholder: &'static str,
    /// Input type (text, password, date, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
    #[prop(default = "")]
    id: &'static str,
) -> impl IntoView {
    view! {
        <input
            type=input_type
            id=id
            placeholder=placeholder
            class="w-full px-4 py-2 border border-gray-300 rounded-lg \
                   focus:ring-2 focus:ring-blue-500 focus:border-transparent \
                   outline-none transition-shadow shadow-sm"
            prop:value=move || value.get()
            on:input=move |ev| value.set(event_target_value(&ev))
        />
    }
}

/// Headline number with a label
#[component]
pub fn StatCard(
    label: &'static str,
    value: String,
    #[prop(default = "text-blue-600")]
    accent: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-white rounded-2xl shadow-sm border border-gray-100 p-6">
            <p class="text-sm text-gray-500 uppercase tracking-wide">{label}</p>
            <p class=format!("mt-2 text-3xl font-bold {}", accent)>{value}</p>
        </div>
    }
}

/// Groups the integer part in thousands: 1234567.8 -> "1,234,568"
pub fn group_thousands(value: f64) -> String {
    if !value.is_finite() {
        return "-".to_string();
    }
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if rounded < 0 {
        format!("-{}", out)
    } else {
        out
    }
}

/// Price with currency, EGP when the backend sent none
pub fn format_price(value: f64, currency: Option<&str>) -> String {
    format!("{} {}", group_thousands(value), currency.unwrap_or("EGP"))
}

pub fn format_area(value: f64, unit: Option<&str>) -> String {
    let value = if value.fract() == 0.0 {
        group_thousands(value)
    } else {
        format!("{:.1}", value)
    };
    format!("{} {}", value, unit.unwrap_or("m²"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        let cases = [
            (0.0, "0"),
            (999.0, "999"),
            (1000.0, "1,000"),
            (1234567.8, "1,234,568"),
            (-45000.0, "-45,000"),
        ];
        for (value, expected) in cases {
            assert_eq!(group_thousands(value), expected, "value {}", value);
        }
        assert_eq!(group_thousands(f64::NAN), "-");
    }

    #[test]
    fn test_format_price_defaults_currency() {
        assert_eq!(format_price(2500000.0, None), "2,500,000 EGP");
        assert_eq!(format_price(10.0, Some("USD")), "10 USD");
    }

    #[test]
    fn test_format_area() {
        assert_eq!(format_area(120.0, None), "120 m²");
        assert_eq!(format_area(87.26, Some("sqm")), "87.3 sqm");
    }

    #[test]
    fn test_badge_variants() {
        assert!(badge_class("green").contains("bg-green-100"));
        assert!(badge_class("blue").contains("bg-blue-100"));
        assert!(badge_class("unknown").contains("bg-gray-100"));
    }
}
