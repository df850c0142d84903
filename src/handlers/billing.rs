use crate::api::{CheckoutOutcome, CheckoutPlan, SupportApi, DASHBOARD_PATH};
use crate::handlers::{reply, HandlerResult};

const CHECKOUT_FALLBACK: &str = "Sorry, we couldn't open the checkout. Please try again.";

pub async fn checkout_cmd_handler(api: &dyn SupportApi, plan: CheckoutPlan) -> HandlerResult {
    let answer = checkout_impl(api, plan).await;
    reply(answer);
    Ok(())
}

async fn checkout_impl(api: &dyn SupportApi, plan: CheckoutPlan) -> String {
    match api.start_checkout(plan).await {
        Ok(CheckoutOutcome::Redirect(url)) => {
            format!("Open this link to finish the {plan} checkout:\n{url}")
        }
        Ok(CheckoutOutcome::Dashboard) => {
            format!("The server handled the {plan} request; check the dashboard at {DASHBOARD_PATH}")
        }
        Err(err) => {
            log::warn!("couldn't start the {plan} checkout: {err:#}");
            CHECKOUT_FALLBACK.to_owned()
        }
    }
}
