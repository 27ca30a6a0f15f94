//! Pricer GUI
//!
//! Interactive desktop form for theoretical European option prices. Collects
//! the five market inputs, resolves the risk-free rate (custom override or
//! FRED lookup) and displays the Black-Scholes price for the selected kind.

use eframe::egui;
use tracing_subscriber::EnvFilter;

use vanilla_pricer::models::black_scholes;
use vanilla_pricer::prelude::*;

struct PricerApp {
    provider: RateProvider,

    // Form state (raw text, translated at the boundary)
    kind: OptionKind,
    spot_input: String,
    strike_input: String,
    days_input: String,
    vol_input: String,
    use_custom_rate: bool,
    custom_rate_input: String,

    // Outputs
    rate_display: String,
    call_display: String,
    put_display: String,
    status: String,
}

impl PricerApp {
    fn new(provider: RateProvider) -> Self {
        Self {
            provider,
            kind: OptionKind::Call,
            spot_input: String::new(),
            strike_input: String::new(),
            days_input: String::new(),
            vol_input: String::new(),
            use_custom_rate: false,
            custom_rate_input: String::new(),
            rate_display: "Provided by FRED".to_string(),
            call_display: String::new(),
            put_display: String::new(),
            status: String::new(),
        }
    }

    fn calculate(&mut self) {
        // A failed calculation leaves no stale output behind
        self.call_display.clear();
        self.put_display.clear();
        self.status.clear();

        let parsed = (
            parse_field(&self.spot_input),
            parse_field(&self.strike_input),
            parse_field(&self.days_input),
            parse_field(&self.vol_input),
        );
        let (spot, strike, days, vol) = match parsed {
            (Some(s), Some(k), Some(d), Some(v)) => (s, k, d, v),
            _ => {
                self.status = "Invalid input. Please enter numbers.".to_string();
                return;
            }
        };

        // Validate before the rate lookup so bad input never costs a fetch.
        // The rate carries no constraint, so a placeholder passes validation.
        let mut inputs = PricingInputs::new(self.kind, spot, strike, days, vol, 0.0);
        if let Err(e) = inputs.validate() {
            self.status = e.to_string();
            return;
        }

        let quote = self
            .provider
            .resolve(self.use_custom_rate, &self.custom_rate_input);
        self.rate_display = format_rate(&quote);
        if let Some(condition) = &quote.condition {
            self.status = condition.to_string();
        }

        inputs.rate = quote.rate;
        match black_scholes::price(&inputs) {
            // A worthless option still shows $0.00
            Ok(price) => match self.kind {
                OptionKind::Call => self.call_display = format!("${:.2}", price),
                OptionKind::Put => self.put_display = format!("${:.2}", price),
            },
            Err(e) => self.status = e.to_string(),
        }
    }
}

fn parse_field(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok()
}

fn format_rate(quote: &RateQuote) -> String {
    let percent = quote.rate * 100.0;
    match quote.source {
        RateSource::UserOverride => format!("{:.2}% (custom)", percent),
        RateSource::RemoteLookup => match quote.as_of {
            Some(date) => format!("{:.2}% (as of {})", percent, date),
            None => format!("{:.2}%", percent),
        },
        RateSource::Fallback => format!("{:.2}% (default)", percent),
    }
}

impl eframe::App for PricerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Stock Option Pricing");
            ui.separator();

            egui::Grid::new("inputs_grid")
                .spacing([20.0, 6.0])
                .show(ui, |ui| {
                    ui.label("Option Type:");
                    ui.horizontal(|ui| {
                        ui.radio_value(&mut self.kind, OptionKind::Call, "Call");
                        ui.radio_value(&mut self.kind, OptionKind::Put, "Put");
                    });
                    ui.end_row();

                    ui.label("Stock Price:");
                    ui.text_edit_singleline(&mut self.spot_input);
                    ui.end_row();

                    ui.label("Strike Price:");
                    ui.text_edit_singleline(&mut self.strike_input);
                    ui.end_row();

                    ui.label("Time to Expiration (Days):");
                    ui.text_edit_singleline(&mut self.days_input);
                    ui.end_row();

                    ui.label("Volatility:");
                    ui.text_edit_singleline(&mut self.vol_input);
                    ui.end_row();
                });

            ui.separator();
            ui.checkbox(
                &mut self.use_custom_rate,
                "Use custom value for risk-free rate",
            );
            ui.horizontal(|ui| {
                ui.label("Custom Risk-Free Rate (%):");
                ui.add_enabled(
                    self.use_custom_rate,
                    egui::TextEdit::singleline(&mut self.custom_rate_input),
                );
            });

            ui.separator();
            if ui.button("Calculate").clicked() {
                self.calculate();
            }

            ui.separator();
            egui::Grid::new("outputs_grid")
                .spacing([20.0, 6.0])
                .show(ui, |ui| {
                    ui.label("Risk-Free Rate:");
                    ui.label(&self.rate_display);
                    ui.end_row();

                    ui.label("Call Option Price:");
                    ui.label(&self.call_display);
                    ui.end_row();

                    ui.label("Put Option Price:");
                    ui.label(&self.put_display);
                    ui.end_row();
                });

            if !self.status.is_empty() {
                ui.separator();
                ui.colored_label(egui::Color32::LIGHT_RED, &self.status);
            }
        });
    }
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Configuration problems are fatal before any window is shown
    let provider = match Config::from_env().and_then(|config| RateProvider::new(&config)) {
        Ok(provider) => provider,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(2);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([440.0, 460.0])
            .with_title("Stock Option Pricing"),
        ..Default::default()
    };

    eframe::run_native(
        "Stock Option Pricing",
        options,
        Box::new(|_cc| Box::new(PricerApp::new(provider))),
    )
}
