use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDateTime, Utc};
use diesel::prelude::*;
use rust_decimal::Decimal;

use pawhaven_core::ledger::{
    DonationHistoryEntry, LedgerRepositoryTrait, NewPayment, PaymentRecord,
};
use pawhaven_core::{money, Result};

use super::model::PaymentDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::{IntoCore, StorageError};
use crate::schema::{campaigns, payments};

/// Storage for the donation ledger.
///
/// Total arithmetic runs inside SQLite as a column expression
/// (`donated_amount_minor = donated_amount_minor ± ?`), so concurrent
/// donations to the same campaign serialize in the store instead of losing
/// updates. Reversal deletes the record and applies the decrement in the
/// writer's transaction, as one atomic unit.
pub struct LedgerRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl LedgerRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

fn to_minor(amount: Decimal) -> Result<i64> {
    money::to_minor_units(amount).ok_or_else(|| {
        StorageError::InvalidValue(format!("amount {amount} is not cent-precise")).into()
    })
}

#[async_trait]
impl LedgerRepositoryTrait for LedgerRepository {
    fn find_payment(&self, payment_id: &str) -> Result<Option<PaymentRecord>> {
        let mut conn = get_connection(&self.pool)?;
        payments::table
            .find(payment_id)
            .first::<PaymentDB>(&mut conn)
            .optional()
            .into_core()
            .map(|payment| payment.map(PaymentRecord::from))
    }

    fn list_by_campaign(&self, campaign_id: &str) -> Result<Vec<PaymentRecord>> {
        let mut conn = get_connection(&self.pool)?;
        payments::table
            .filter(payments::campaign_id.eq(campaign_id))
            .order(payments::created_at.desc())
            .load::<PaymentDB>(&mut conn)
            .into_core()
            .map(|records| records.into_iter().map(PaymentRecord::from).collect())
    }

    fn history_for_donator(&self, donator_email: &str) -> Result<Vec<DonationHistoryEntry>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = payments::table
            .inner_join(campaigns::table)
            .filter(payments::donator_email.eq(donator_email))
            .select((
                payments::id,
                campaigns::id,
                campaigns::pet_name,
                campaigns::pet_image,
                payments::amount_minor,
                payments::created_at,
            ))
            .order(payments::created_at.desc())
            .load::<(String, String, String, Option<String>, i64, NaiveDateTime)>(&mut conn)
            .into_core()?;
        Ok(rows
            .into_iter()
            .map(
                |(payment_id, campaign_id, pet_name, pet_image, amount_minor, created_at)| {
                    DonationHistoryEntry {
                        payment_id,
                        campaign_id,
                        pet_name,
                        pet_image,
                        amount: money::from_minor_units(amount_minor),
                        created_at,
                    }
                },
            )
            .collect())
    }

    async fn increment_donated(&self, campaign_id: &str, amount: Decimal) -> Result<bool> {
        let minor = to_minor(amount)?;
        let campaign_id = campaign_id.to_string();
        let updated = self
            .writer
            .exec(move |conn| {
                diesel::update(
                    campaigns::table
                        .find(&campaign_id)
                        .filter(campaigns::is_paused.eq(false)),
                )
                .set(
                    campaigns::donated_amount_minor.eq(campaigns::donated_amount_minor + minor),
                )
                .execute(conn)
                .into_core()
            })
            .await?;
        Ok(updated == 1)
    }

    async fn decrement_donated(&self, campaign_id: &str, amount: Decimal) -> Result<()> {
        let minor = to_minor(amount)?;
        let campaign_id = campaign_id.to_string();
        self.writer
            .exec(move |conn| {
                diesel::update(campaigns::table.find(&campaign_id))
                    .set(
                        campaigns::donated_amount_minor
                            .eq(campaigns::donated_amount_minor - minor),
                    )
                    .execute(conn)
                    .into_core()
            })
            .await?;
        Ok(())
    }

    async fn insert_payment(&self, new_payment: NewPayment) -> Result<PaymentRecord> {
        let payment_db = PaymentDB {
            id: new_payment.id,
            campaign_id: new_payment.campaign_id,
            donator_email: new_payment.donator_email,
            donator_name: new_payment.donator_name,
            amount_minor: to_minor(new_payment.amount)?,
            created_at: Utc::now().naive_utc(),
        };
        self.writer
            .exec(move |conn| {
                diesel::insert_into(payments::table)
                    .values(&payment_db)
                    .get_result::<PaymentDB>(conn)
                    .into_core()
                    .map(PaymentRecord::from)
            })
            .await
    }

    async fn reverse_payment(&self, payment_id: &str) -> Result<bool> {
        let payment_id = payment_id.to_string();
        self.writer
            .exec(move |conn| {
                // Within the writer's transaction: read, delete, decrement.
                // A record already gone means a concurrent reversal won;
                // skip the decrement so re-application is a no-op.
                let record = payments::table
                    .find(&payment_id)
                    .first::<PaymentDB>(conn)
                    .optional()
                    .into_core()?;
                let Some(record) = record else {
                    return Ok(false);
                };
                let deleted = diesel::delete(payments::table.find(&payment_id))
                    .execute(conn)
                    .into_core()?;
                if deleted == 0 {
                    return Ok(false);
                }
                diesel::update(campaigns::table.find(&record.campaign_id))
                    .set(
                        campaigns::donated_amount_minor
                            .eq(campaigns::donated_amount_minor - record.amount_minor),
                    )
                    .execute(conn)
                    .into_core()?;
                Ok(true)
            })
            .await
    }
}
