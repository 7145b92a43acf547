//! Legal-move resolver: which cards of a hand may be played right now.

use crate::domain::cards_logic::{count_fail_of, effective_suit, is_fail_of};
use crate::domain::rules::FREE_LEAD_CALLED_COUNT;
use crate::domain::state::PartnerCall;
use crate::domain::{Card, EffectiveSuit};

/// Everything the resolver needs to know about one seat's decision.
#[derive(Debug, Clone, Copy)]
pub struct PlayContext<'a> {
    /// The seat's whole hand, including a pending under card.
    pub hand: &'a [Card],
    /// Effective suit of the current trick; `None` when leading.
    pub lead: Option<EffectiveSuit>,
    /// Partner call, `None` when the picker went alone.
    pub call: Option<&'a PartnerCall>,
    pub called_suit_led: bool,
    pub is_picker: bool,
}

impl PlayContext<'_> {
    fn holds_called_card(&self) -> bool {
        self.call
            .is_some_and(|c| self.hand.contains(&c.called_card()))
    }

    /// The picker's single remaining fail card of a called suit that has not
    /// been led yet. It must be kept until that suit is led. Under calls
    /// have no hold card.
    fn hold_card(&self) -> Option<Card> {
        let call = self.call?;
        if !self.is_picker || self.called_suit_led || call.under_card.is_some() {
            return None;
        }
        if count_fail_of(self.hand, call.suit) != 1 {
            return None;
        }
        self.hand.iter().copied().find(|&c| is_fail_of(c, call.suit))
    }
}

/// Compute the legal subset of `ctx.hand`, sorted. Never empty for a
/// non-empty hand.
pub fn legal_plays(ctx: &PlayContext<'_>) -> Vec<Card> {
    if ctx.hand.is_empty() {
        return Vec::new();
    }

    let mut legal = match ctx.lead {
        None => legal_leads(ctx),
        Some(lead) => legal_follows(ctx, lead),
    };
    if legal.is_empty() {
        legal = ctx.hand.to_vec();
    }
    legal.sort();
    legal
}

fn legal_leads(ctx: &PlayContext<'_>) -> Vec<Card> {
    let mut leads: Vec<Card> = ctx.hand.to_vec();

    if let Some(call) = ctx.call {
        let called = call.called_card();
        if ctx.holds_called_card() && count_fail_of(ctx.hand, call.suit) < FREE_LEAD_CALLED_COUNT
        {
            leads.retain(|&c| c == called || !is_fail_of(c, call.suit));
        }
    }
    if let Some(hold) = ctx.hold_card() {
        leads.retain(|&c| c != hold);
    }
    leads
}

fn legal_follows(ctx: &PlayContext<'_>, lead: EffectiveSuit) -> Vec<Card> {
    if let Some(call) = ctx.call {
        if lead == call.called_lead() && !ctx.called_suit_led && ctx.holds_called_card() {
            return vec![call.called_card()];
        }
    }

    let followers: Vec<Card> = ctx
        .hand
        .iter()
        .copied()
        .filter(|&c| effective_suit(c) == lead)
        .collect();
    if !followers.is_empty() {
        return followers;
    }

    let mut any = ctx.hand.to_vec();
    if let Some(hold) = ctx.hold_card() {
        any.retain(|&c| c != hold);
    }
    any
}
