//! Startup bootstrap: seed the first admin user from the environment.

use reelgate_db::repositories::UserRepo;
use reelgate_db::DbPool;

use crate::auth::password::hash_password;

/// Create the initial admin user when the `users` table is empty and
/// `ADMIN_EMAIL`/`ADMIN_PASSWORD` are both set.
///
/// Idempotent: once any user exists, this does nothing, so rotating the
/// env vars later never silently adds accounts.
pub async fn ensure_admin_user(pool: &DbPool) -> anyhow::Result<()> {
    if UserRepo::count(pool).await? > 0 {
        return Ok(());
    }

    let (Ok(email), Ok(password)) = (
        std::env::var("ADMIN_EMAIL"),
        std::env::var("ADMIN_PASSWORD"),
    ) else {
        tracing::warn!(
            "No users exist and ADMIN_EMAIL/ADMIN_PASSWORD are not set; admin login unavailable"
        );
        return Ok(());
    };

    let hash = hash_password(&password)
        .map_err(|e| anyhow::anyhow!("Failed to hash admin password: {e}"))?;
    let user = UserRepo::create(pool, &email, &hash, "admin").await?;
    tracing::info!(user_id = %user.id, "Bootstrapped initial admin user");
    Ok(())
}
