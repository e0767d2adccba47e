//! Cashup workflow demo
//!
//! Seeds an in-memory store with a branch's vouchers and staff, then
//! walks two business days through the full cycle: autofill, count,
//! commission, close, carry-forward, and a history export.
//!
//! Usage: cargo run --bin demo

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal_macros::dec;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cashup_core::dailyclose::{DailyCloseService, SaveContext};
use cashup_core::history::{HistoryQuery, HistoryReporter};
use cashup_core::master::{Branch, BranchStatus, Employee};
use cashup_core::vouchers::{Voucher, VoucherItem, VoucherStatus, VoucherType};
use cashup_shared::types::{
    BranchId, CompanyId, EmployeeId, UserId, VoucherId, VoucherItemId,
};
use cashup_shared::AppConfig;
use cashup_store::MemoryStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cashup=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load()?;
    info!(
        rate = %config.commission.rate_per_service,
        mode = ?config.commission.mode,
        "Configuration loaded"
    );

    let store = Arc::new(MemoryStore::new());
    let company = CompanyId::new();
    let branch = Branch {
        id: BranchId::new(),
        name: "Downtown".to_string(),
        status: BranchStatus::Active,
    };
    let cashier = UserId::new();
    let day_one = NaiveDate::from_ymd_opt(2024, 3, 4).expect("valid date");
    let day_two = day_one.succ_opt().expect("valid date");

    let stylists = seed_staff(&store, company);
    seed_vouchers(&store, branch.id, day_one, &stylists);

    let service = DailyCloseService::new(
        Arc::clone(&store),
        Arc::clone(&store),
        Arc::clone(&store),
        Arc::clone(&store),
        config.commission.rate_per_service,
    );
    let ctx = SaveContext {
        branch: Some(branch.clone()),
        acting_user: cashier,
    };

    // Day one: pull voucher totals into the form.
    let mut draft = service.load(branch.id, day_one).await?;
    draft.fields.opening_cash = dec!(1000);
    let outcome = service.autofill_from_transactions(branch.id, day_one).await?;
    match outcome.suggestion() {
        Some(suggestion) => {
            draft.apply_autofill(&suggestion);
            info!(
                cash_sales = %suggestion.cash_sales,
                cash_received = %suggestion.cash_received,
                "Autofill applied"
            );
        }
        None => info!("No vouchers posted for the day"),
    }

    // Commission from the day's transactions, payable share into expenses.
    let summary = service
        .compute_commissions(
            config.commission.mode,
            company,
            branch.id,
            day_one,
            &draft.entries,
        )
        .await?;
    for line in &summary.lines {
        info!(
            stylist = %line.name,
            tier = ?line.tier,
            services = %line.service_count,
            amount = %line.commission_amount,
            "Commission line"
        );
    }
    draft.apply_payable_commission(&summary);

    // Count the drawer and close the day.
    draft.fields.closing_cash_actual = dec!(1445);
    draft.deposited_by = "Morning shift".to_string();
    let (record, _) = service
        .close_daily_record(&draft, day_one, config.commission.mode, &ctx)
        .await?;
    info!(
        system = %record.closing_cash_system,
        actual = %record.fields.closing_cash_actual,
        difference = %record.difference,
        "Day closed"
    );

    // Day two opens with yesterday's counted cash.
    let next = service.load(branch.id, day_two).await?;
    info!(opening_cash = %next.fields.opening_cash, "Next day carried forward");
    service
        .save_daily_record(&next, day_two, config.commission.mode, &ctx)
        .await?;

    // History across both days, newest first.
    let rows = service
        .query_history(&HistoryQuery {
            branch_id: Some(branch.id),
            from: day_one,
            to: day_two,
        })
        .await?;
    let table = HistoryReporter::export(&rows);
    println!("{}", table.headers.join(" | "));
    for row in &table.rows {
        println!("{}", row.join(" | "));
    }

    Ok(())
}

/// Seeds two stylists, one on monthly accrual.
fn seed_staff(store: &MemoryStore, company: CompanyId) -> Vec<EmployeeId> {
    let roster = [("Amira", false), ("Bashir", true)];
    roster
        .iter()
        .map(|(name, eligible)| {
            let employee = Employee {
                id: EmployeeId::new(),
                name: (*name).to_string(),
                is_active: true,
                is_dual_commission_eligible: *eligible,
            };
            let id = employee.id;
            store.insert_employee(company, employee);
            id
        })
        .collect()
}

/// Seeds one day of posted vouchers with service lines per stylist.
fn seed_vouchers(
    store: &MemoryStore,
    branch_id: BranchId,
    date: NaiveDate,
    stylists: &[EmployeeId],
) {
    let sales = Voucher {
        id: VoucherId::new(),
        branch_id,
        date,
        voucher_type: VoucherType::Sales,
        status: VoucherStatus::Posted,
        net_amount: dec!(480),
    };
    for (stylist, quantity) in stylists.iter().zip([dec!(5), dec!(3)]) {
        store.insert_voucher_item(VoucherItem {
            id: VoucherItemId::new(),
            voucher_id: sales.id,
            quantity,
            salesman_id: Some(*stylist),
        });
    }
    store.insert_voucher(sales);

    store.insert_voucher(Voucher {
        id: VoucherId::new(),
        branch_id,
        date,
        voucher_type: VoucherType::Receipt,
        status: VoucherStatus::Posted,
        net_amount: dec!(35),
    });
    store.insert_voucher(Voucher {
        id: VoucherId::new(),
        branch_id,
        date,
        voucher_type: VoucherType::Payment,
        status: VoucherStatus::Posted,
        net_amount: dec!(62),
    });
}
