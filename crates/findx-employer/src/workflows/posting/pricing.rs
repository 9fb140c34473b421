use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use serde::{Deserialize, Serialize};

use super::domain::{NotificationChannel, NotificationReach};
use super::draft::AdTypeSelection;

/// Amount in integer minor currency units (cents).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Self = Self(0);

    pub const fn from_minor(minor: u64) -> Self {
        Self(minor)
    }

    pub const fn from_major(major: u64) -> Self {
        Self(major * 100)
    }

    pub const fn minor_units(self) -> u64 {
        self.0
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// Notification package prices for one reach tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NotificationTier {
    pub reach: NotificationReach,
    pub app: Money,
    pub email: Money,
    pub both: Money,
}

impl NotificationTier {
    const fn price(&self, channel: NotificationChannel) -> Money {
        match channel {
            NotificationChannel::None => Money::ZERO,
            NotificationChannel::App => self.app,
            NotificationChannel::Email => self.email,
            NotificationChannel::Both => self.both,
        }
    }
}

/// The single price list every total is computed from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceTable {
    pub standard_listing: Money,
    pub premium_listing: Money,
    pub immediate_start: Money,
    pub notifications: Vec<NotificationTier>,
}

impl PriceTable {
    pub fn standard() -> Self {
        let tier = |reach, app, email, both| NotificationTier {
            reach,
            app: Money::from_major(app),
            email: Money::from_major(email),
            both: Money::from_major(both),
        };

        Self {
            standard_listing: Money::from_major(49),
            premium_listing: Money::from_major(99),
            immediate_start: Money::from_major(45),
            notifications: vec![
                tier(NotificationReach::Reach100, 29, 39, 59),
                tier(NotificationReach::Reach250, 69, 89, 129),
                tier(NotificationReach::Reach500, 119, 149, 219),
                tier(NotificationReach::Reach750, 159, 199, 299),
                tier(NotificationReach::Reach1000, 199, 249, 379),
            ],
        }
    }

    pub const fn listing_price(&self, premium: bool) -> Money {
        if premium {
            self.premium_listing
        } else {
            self.standard_listing
        }
    }

    /// Price of a notification package; a reach missing from the table costs nothing.
    pub fn notification_price(
        &self,
        reach: NotificationReach,
        channel: NotificationChannel,
    ) -> Money {
        self.notifications
            .iter()
            .find(|tier| tier.reach == reach)
            .map(|tier| tier.price(channel))
            .unwrap_or(Money::ZERO)
    }
}

impl Default for PriceTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Total for an ad-type selection: listing + immediate start + notifications.
pub fn compute_total(table: &PriceTable, ad_types: &AdTypeSelection) -> Money {
    let immediate_start = if ad_types.immediate_start {
        table.immediate_start
    } else {
        Money::ZERO
    };

    table.listing_price(ad_types.premium)
        + immediate_start
        + table.notification_price(ad_types.reach, ad_types.channel)
}

/// One entry of the payment manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: String,
    pub name: String,
    pub price: Money,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuote {
    pub line_items: Vec<LineItem>,
    pub total: Money,
}

pub fn quote(table: &PriceTable, ad_types: &AdTypeSelection) -> PriceQuote {
    let mut line_items = vec![if ad_types.premium {
        LineItem {
            id: "premium_listing".to_string(),
            name: "Premium listing".to_string(),
            price: table.premium_listing,
        }
    } else {
        LineItem {
            id: "standard_listing".to_string(),
            name: "Standard listing".to_string(),
            price: table.standard_listing,
        }
    }];

    if ad_types.immediate_start {
        line_items.push(LineItem {
            id: "immediate_start".to_string(),
            name: "Immediate start badge".to_string(),
            price: table.immediate_start,
        });
    }

    if ad_types.channel != NotificationChannel::None {
        line_items.push(LineItem {
            id: format!(
                "notifications_{}_{}",
                ad_types.reach.candidates(),
                channel_id(ad_types.channel)
            ),
            name: format!(
                "{} to {} candidates",
                ad_types.channel.label(),
                ad_types.reach.candidates()
            ),
            price: table.notification_price(ad_types.reach, ad_types.channel),
        });
    }

    PriceQuote {
        line_items,
        total: compute_total(table, ad_types),
    }
}

const fn channel_id(channel: NotificationChannel) -> &'static str {
    match channel {
        NotificationChannel::None => "none",
        NotificationChannel::App => "app",
        NotificationChannel::Email => "email",
        NotificationChannel::Both => "both",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection(
        premium: bool,
        immediate_start: bool,
        channel: NotificationChannel,
        reach: NotificationReach,
    ) -> AdTypeSelection {
        AdTypeSelection {
            premium,
            immediate_start,
            channel,
            reach,
        }
    }

    #[test]
    fn immediate_start_with_both_channels_at_250() {
        let table = PriceTable::standard();
        let ad_types = selection(
            false,
            true,
            NotificationChannel::Both,
            NotificationReach::Reach250,
        );
        assert_eq!(compute_total(&table, &ad_types), Money::from_major(223));
    }

    #[test]
    fn switching_none_to_both_adds_the_both_price() {
        let table = PriceTable::standard();
        for reach in NotificationReach::ordered() {
            let without = selection(true, false, NotificationChannel::None, reach);
            let with = AdTypeSelection {
                channel: NotificationChannel::Both,
                ..without
            };
            assert_eq!(
                compute_total(&table, &with),
                compute_total(&table, &without)
                    + table.notification_price(reach, NotificationChannel::Both)
            );
        }
    }

    #[test]
    fn total_is_deterministic() {
        let table = PriceTable::standard();
        let ad_types = selection(
            true,
            true,
            NotificationChannel::Email,
            NotificationReach::Reach750,
        );
        assert_eq!(compute_total(&table, &ad_types), compute_total(&table, &ad_types));
        assert_eq!(compute_total(&table, &ad_types), Money::from_major(99 + 45 + 199));
    }

    #[test]
    fn quote_line_items_sum_to_total() {
        let table = PriceTable::standard();
        for premium in [false, true] {
            for immediate_start in [false, true] {
                for channel in NotificationChannel::ordered() {
                    let ad_types =
                        selection(premium, immediate_start, channel, NotificationReach::Reach500);
                    let quote = quote(&table, &ad_types);
                    let summed: Money = quote.line_items.iter().map(|item| item.price).sum();
                    assert_eq!(summed, quote.total);
                }
            }
        }
    }

    #[test]
    fn channel_none_adds_no_line_item() {
        let table = PriceTable::standard();
        let quote = quote(&table, &AdTypeSelection::default());
        assert_eq!(quote.line_items.len(), 1);
        assert_eq!(quote.line_items[0].id, "standard_listing");
        assert_eq!(quote.total.to_string(), "49.00");
    }
}
