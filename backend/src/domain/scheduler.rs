//! Day-by-day scheduling of selected locations.
//!
//! The scheduler partitions a ranked location list into day buckets,
//! labels each stop with a time slot, dates each day from today, and
//! appends a restaurant stop to days with room for one. The wall clock
//! and the restaurant draw sit behind traits so callers (and tests) can
//! pin them; production defaults are the system clock and a uniform
//! random pick.

use chrono::{Duration, Local, NaiveDate};
use shared::{ItineraryActivity, ItineraryDay, Location, LocationType};

/// Time slot labels cycled across a day's activities by position.
pub const TIME_SLOTS: [&str; 3] = [
    "Morning (9:00-12:00)",
    "Afternoon (12:00-16:00)",
    "Evening (16:00-20:00)",
];

/// Slot label for injected restaurant stops.
pub const MEAL_TIME_SLOT: &str = "Lunch/Dinner (12:00-14:00)";

/// Source of "today" for day date labels.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Real local-time clock used in production.
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a fixed date, for deterministic date labels.
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Chooses which restaurant to append to a day.
///
/// `pick` is only called with `count >= 1` and must return an index in
/// `0..count`.
pub trait RestaurantPicker: Send + Sync {
    fn pick(&self, count: usize) -> usize;
}

/// Uniform random restaurant choice used in production. Two runs over
/// identical inputs may pick different restaurants; everything else
/// about generation is deterministic.
pub struct RandomRestaurantPicker;

impl RestaurantPicker for RandomRestaurantPicker {
    fn pick(&self, count: usize) -> usize {
        use rand::Rng;
        rand::thread_rng().gen_range(0..count)
    }
}

/// Picker pinned to a fixed index (reduced modulo the restaurant
/// count), for deterministic meal stops.
pub struct FixedRestaurantPicker(pub usize);

impl RestaurantPicker for FixedRestaurantPicker {
    fn pick(&self, count: usize) -> usize {
        self.0 % count
    }
}

/// Distributes selected locations across trip days and fills in meals.
pub struct Scheduler {
    clock: Box<dyn Clock>,
    picker: Box<dyn RestaurantPicker>,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler {
    /// Create a scheduler with the production clock and random picker.
    pub fn new() -> Self {
        Self::with_parts(Box::new(SystemClock), Box::new(RandomRestaurantPicker))
    }

    /// Create a scheduler with explicit clock and picker.
    pub fn with_parts(clock: Box<dyn Clock>, picker: Box<dyn RestaurantPicker>) -> Self {
        Self { clock, picker }
    }

    /// Partition ranked locations into one bucket per day.
    ///
    /// Each day aims for 2-4 activities; later days may come up short
    /// or empty once the list is exhausted. Day `d` is dated today
    /// plus `d - 1`. `total_days` must be at least 1.
    pub fn distribute_across_days(
        &self,
        locations: &[Location],
        total_days: u32,
    ) -> Vec<ItineraryDay> {
        let start_date = self.clock.today();
        let activities_per_day = locations.len().div_ceil(total_days as usize).clamp(2, 4);

        let mut days = Vec::with_capacity(total_days as usize);
        for day_number in 1..=total_days {
            let start = (day_number as usize - 1) * activities_per_day;
            let end = (start + activities_per_day).min(locations.len());
            let day_locations = locations.get(start..end).unwrap_or(&[]);

            let date = start_date + Duration::days(i64::from(day_number) - 1);
            let mut day = ItineraryDay {
                day: day_number,
                date: date.format("%A, %B %-d, %Y").to_string(),
                activities: Vec::new(),
                total_duration: 0.0,
            };
            for (index, location) in day_locations.iter().enumerate() {
                let time_slot = TIME_SLOTS[index % TIME_SLOTS.len()];
                day.push_activity(ItineraryActivity::from_location(location, time_slot));
            }
            days.push(day);
        }

        days
    }

    /// Append a restaurant stop to each day that has room for one.
    ///
    /// Restaurants come from the destination's full location list, not
    /// the filtered selection. The appended activity gets a
    /// day-qualified id so the same restaurant can appear on several
    /// days without id collisions.
    pub fn add_meal_stops(
        &self,
        days: Vec<ItineraryDay>,
        all_locations: &[Location],
    ) -> Vec<ItineraryDay> {
        let restaurants: Vec<&Location> = all_locations
            .iter()
            .filter(|l| l.location_type == LocationType::Restaurant)
            .collect();

        days.into_iter()
            .map(|mut day| {
                if day.activities.len() < 4 && !restaurants.is_empty() {
                    let restaurant = restaurants[self.picker.pick(restaurants.len())];
                    let mut meal = ItineraryActivity::from_location(restaurant, MEAL_TIME_SLOT);
                    meal.id = format!("{}-day-{}", restaurant.id, day.day);
                    day.push_activity(meal);
                }
                day
            })
            .collect()
    }
}
