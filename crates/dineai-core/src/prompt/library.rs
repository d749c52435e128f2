//! Built-in prompt template bodies.
//!
//! One template per feature, plus the derived menu image prompt and the
//! single-field prompts used by the insight helpers.

/// Template identifiers.
pub mod ids {
    pub const EVENT_PLAN: &str = "event_plan";
    pub const TODAYS_EVENT: &str = "todays_event";
    pub const MENU_RECOMMENDATION: &str = "menu_recommendation";
    pub const MENU_IMAGE: &str = "menu_image";
    pub const LEFTOVER_OPTIMIZATION: &str = "leftover_optimization";
    pub const CHATBOT: &str = "chatbot";
    pub const PRICING_STRATEGY: &str = "pricing_strategy";
    pub const DEMAND_FORECAST: &str = "demand_forecast";
    pub const INVENTORY_TRACKING: &str = "inventory_tracking";
    pub const SENTIMENT_ANALYSIS: &str = "sentiment_analysis";
}

const EVENT_PLAN: &str = "\
A restaurant reservation has been made with:
- Occasion: {occasion}
- Guests: {people}
- Cuisine: {cuisine}
- Drinks: {drinks}
- Budget: {budget}

Recommend:
- A suitable event theme
- Decoration style
- Custom menu (dishes, drinks, dessert combo)
- A discount offer
- A unique marketing slogan
- An Instagram caption and trending hashtags
- Seating optimization for the group size
- Allergy-friendly and diet-specific recommendations
- Sustainable dining strategies
- A personalized thank-you message
- A music playlist
- Table arrangements for group dynamics
- Guest experience enhancements
- Exclusive loyalty program offers";

const TODAYS_EVENT: &str = "\
Today is {today}. Identify any special occasion (e.g., Valentine's Day, Christmas, Thanksgiving) and recommend:
- A restaurant theme
- Ideal cuisine (Veg, Non-Veg, Vegan)
- Drinks (Soft Drinks, Mocktails, Cocktails, Beer)
- A dessert pairing
- A discount strategy based on demand trends
- A short marketing slogan
- An Instagram caption and trending hashtags
- Lighting and music
- Sustainability strategies
- A seating arrangement
- Predicted customer sentiment and demand
- A pricing strategy for discounts
- Event entertainment options
- A staff dress code for the theme
- Social media engagement tips
- A promotional email template";

const MENU_RECOMMENDATION: &str = "\
Suggest a {meal_type} menu for guests with a {dietary_pref} dietary preference.
For each dish give its name, a one-line description, the key ingredients and an approximate price.
Finish with a drink pairing and a dessert that fit the same preference.";

const MENU_IMAGE: &str = "\
A professional, appetizing food photograph of a {dietary_pref} {meal_type} served on a restaurant table, \
natural light, shallow depth of field.";

const LEFTOVER_OPTIMIZATION: &str = "\
A restaurant kitchen has {quantity} kg of leftover {leftover_type}.
Suggest:
- Creative dishes or specials that reuse it safely
- How long it keeps and how to store it
- Portioning ideas to reduce future waste
- Donation or composting options for what cannot be reused";

const CHATBOT: &str = "\
You are a helpful assistant for a restaurant manager. Answer concisely and practically.

Question: {user_input}";

const PRICING_STRATEGY: &str = "\
Suggest a pricing strategy for the menu item \"{item}\": a base price range, \
time-of-day or seasonal adjustments, bundle ideas and how to present the price on the menu.";

const DEMAND_FORECAST: &str = "\
Forecast customer demand for a restaurant for {period}. \
Cover expected busy and quiet times, dishes likely to be popular, and staffing and stock suggestions.";

const INVENTORY_TRACKING: &str = "\
Review this restaurant inventory and flag items that are running low, items at risk of spoiling, \
and a suggested reorder list:
{inventory}";

const SENTIMENT_ANALYSIS: &str = "\
Analyze the sentiment and food preferences expressed in this customer feedback. \
Summarize what guests liked, what they disliked, and concrete menu or service changes:
{feedback}";

/// `(id, body)` for every built-in template.
pub fn builtin_bodies() -> [(&'static str, &'static str); 10] {
    [
        (ids::EVENT_PLAN, EVENT_PLAN),
        (ids::TODAYS_EVENT, TODAYS_EVENT),
        (ids::MENU_RECOMMENDATION, MENU_RECOMMENDATION),
        (ids::MENU_IMAGE, MENU_IMAGE),
        (ids::LEFTOVER_OPTIMIZATION, LEFTOVER_OPTIMIZATION),
        (ids::CHATBOT, CHATBOT),
        (ids::PRICING_STRATEGY, PRICING_STRATEGY),
        (ids::DEMAND_FORECAST, DEMAND_FORECAST),
        (ids::INVENTORY_TRACKING, INVENTORY_TRACKING),
        (ids::SENTIMENT_ANALYSIS, SENTIMENT_ANALYSIS),
    ]
}
