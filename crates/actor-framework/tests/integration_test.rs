use actor_framework::{ActorEntity, FrameworkError, ResourceActor};
use async_trait::async_trait;

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Seat {
    id: u32,
    number: u32,
    holder: Option<String>,
    notes: Vec<String>,
}

#[derive(Debug)]
struct SeatCreate {
    number: u32,
}

#[derive(Debug)]
struct SeatUpdate {
    note: String,
}

#[derive(Debug)]
enum SeatAction {
    Hold(String),
    /// Records the guest, then fails; the recorded guest must not survive.
    HoldThenFail(String),
    Free,
}

#[derive(Debug, PartialEq, thiserror::Error)]
enum SeatError {
    #[error("seat {0} is held")]
    Held(u32),
    #[error("seat number must be positive")]
    InvalidNumber,
    #[error("note rejected")]
    NoteRejected,
    #[error("forced failure")]
    Forced,
}

#[async_trait]
impl ActorEntity for Seat {
    type Id = u32;
    type Create = SeatCreate;
    type Update = SeatUpdate;
    type Action = SeatAction;
    type ActionResult = bool;
    type Context = ();
    type Error = SeatError;

    fn from_create_params(id: u32, params: SeatCreate) -> Result<Self, Self::Error> {
        if params.number == 0 {
            return Err(SeatError::InvalidNumber);
        }
        Ok(Self {
            id,
            number: params.number,
            holder: None,
            notes: Vec::new(),
        })
    }

    fn natural_key(&self) -> Option<String> {
        Some(self.number.to_string())
    }

    async fn on_update(
        &mut self,
        update: SeatUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        self.notes.push(update.note.clone());
        if update.note.is_empty() {
            return Err(SeatError::NoteRejected);
        }
        Ok(())
    }

    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        match self.holder {
            Some(_) => Err(SeatError::Held(self.number)),
            None => Ok(()),
        }
    }

    async fn handle_action(
        &mut self,
        action: SeatAction,
        _ctx: &Self::Context,
    ) -> Result<bool, Self::Error> {
        match action {
            SeatAction::Hold(guest) => {
                if self.holder.is_some() {
                    return Err(SeatError::Held(self.number));
                }
                self.holder = Some(guest);
                Ok(true)
            }
            SeatAction::HoldThenFail(guest) => {
                self.holder = Some(guest);
                Err(SeatError::Forced)
            }
            SeatAction::Free => Ok(self.holder.take().is_some()),
        }
    }
}

// --- Tests ---

#[tokio::test]
async fn test_framework_full_lifecycle() {
    let (actor, client) = ResourceActor::new(10);
    tokio::spawn(actor.run(()));

    // 1. Create returns the stored entity with its id
    let seat: Seat = client.create(SeatCreate { number: 4 }).await.unwrap();
    assert_eq!(seat.id, 1);
    assert_eq!(seat.holder, None);

    // 2. Action
    let held = client
        .perform_action(seat.id, SeatAction::Hold("ana".into()))
        .await
        .unwrap();
    assert!(held);
    let fetched = client.get(seat.id).await.unwrap().unwrap();
    assert_eq!(fetched.holder.as_deref(), Some("ana"));

    // 3. Update
    let updated = client
        .update(seat.id, SeatUpdate { note: "by the window".into() })
        .await
        .unwrap();
    assert_eq!(updated.notes, vec!["by the window".to_string()]);

    // 4. Delete is vetoed while held, allowed once freed
    let vetoed = client.delete(seat.id).await.unwrap_err();
    assert_eq!(vetoed.downcast_entity::<SeatError>().unwrap(), SeatError::Held(4));
    assert!(client.perform_action(seat.id, SeatAction::Free).await.unwrap());
    client.delete(seat.id).await.unwrap();
    assert!(client.get(seat.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_duplicate_natural_key_is_a_conflict() {
    let (actor, client) = ResourceActor::<Seat>::new(10);
    tokio::spawn(actor.run(()));

    client.create(SeatCreate { number: 7 }).await.unwrap();
    let err = client.create(SeatCreate { number: 7 }).await.unwrap_err();
    assert!(matches!(err, FrameworkError::Conflict(ref key) if key == "7"));

    let invalid = client.create(SeatCreate { number: 0 }).await.unwrap_err();
    assert_eq!(
        invalid.downcast_entity::<SeatError>().unwrap(),
        SeatError::InvalidNumber
    );

    client.create(SeatCreate { number: 8 }).await.unwrap();
    let mut numbers: Vec<u32> = client
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.number)
        .collect();
    numbers.sort_unstable();
    assert_eq!(numbers, vec![7, 8]);
}

#[tokio::test]
async fn test_failed_commands_leave_the_entity_untouched() {
    let (actor, client) = ResourceActor::<Seat>::new(10);
    tokio::spawn(actor.run(()));

    let seat = client.create(SeatCreate { number: 2 }).await.unwrap();

    let err = client
        .perform_action(seat.id, SeatAction::HoldThenFail("bo".into()))
        .await
        .unwrap_err();
    assert_eq!(err.downcast_entity::<SeatError>().unwrap(), SeatError::Forced);

    let err = client
        .update(seat.id, SeatUpdate { note: String::new() })
        .await
        .unwrap_err();
    assert_eq!(
        err.downcast_entity::<SeatError>().unwrap(),
        SeatError::NoteRejected
    );

    let after = client.get(seat.id).await.unwrap().unwrap();
    assert_eq!(after, seat);
}

#[tokio::test]
async fn test_unknown_id_is_not_found() {
    let (actor, client) = ResourceActor::<Seat>::new(10);
    tokio::spawn(actor.run(()));

    let err = client.perform_action(99, SeatAction::Free).await.unwrap_err();
    assert!(matches!(err, FrameworkError::NotFound(ref id) if id == "99"));
    assert!(matches!(
        client.delete(99).await,
        Err(FrameworkError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_concurrent_holds_have_one_winner() {
    let (actor, client) = ResourceActor::<Seat>::new(32);
    tokio::spawn(actor.run(()));
    let seat = client.create(SeatCreate { number: 1 }).await.unwrap();

    let mut handles = Vec::new();
    for n in 0..10 {
        let client = client.clone();
        handles.push(tokio::spawn(async move {
            client
                .perform_action(seat.id, SeatAction::Hold(format!("guest-{n}")))
                .await
        }));
    }

    let mut winners = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(true) => winners += 1,
            Err(e) => assert_eq!(e.downcast_entity::<SeatError>().unwrap(), SeatError::Held(1)),
            Ok(false) => panic!("hold never reports false"),
        }
    }
    assert_eq!(winners, 1);
}

#[tokio::test]
async fn test_closed_actor_is_reported() {
    let (actor, client) = ResourceActor::<Seat>::new(10);
    drop(actor);

    let err = client.list().await.unwrap_err();
    assert!(matches!(err, FrameworkError::ActorClosed));
}
