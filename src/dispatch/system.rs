/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::debug;
use log::info;
use log::warn;
use rand::seq::SliceRandom;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::dispatch::rng::DispatchRng;
use crate::elevator::Elevator;
use crate::shared::Direction;
use crate::shared::DispatchError;
use crate::shared::ElevatorStatus;
use crate::shared::PickupRequest;

/**
 * Dispatch and motion control for a bank of elevators.
 *
 * No car moves until `step` is called: `pickup` and `update` only record
 * state. Each step first resolves the pending pickup queue into goal
 * assignments, then advances every busy car one floor toward its goal.
 * A car that receives a goal in the assignment phase moves within the
 * motion phase of the same step.
 *
 * # Fields
 * - `elevators`:        The car bank, fixed size, indexed by car id.
 * - `pickup_requests`:  Pending pickups in arrival order.
 * - `rng`:              Random source for the no-candidate fallback.
 */
pub struct ElevatorControlSystem {
    elevators: Vec<Elevator>,
    pickup_requests: Vec<PickupRequest>,
    rng: DispatchRng,
}

impl ElevatorControlSystem {
    pub fn new(num_elevators: usize) -> ElevatorControlSystem {
        Self::with_rng(num_elevators, DispatchRng::default())
    }

    /// Same as `new`, with a caller-supplied random source. Seed the rng
    /// to make the fallback choices reproducible.
    pub fn with_rng(num_elevators: usize, rng: DispatchRng) -> ElevatorControlSystem {
        ElevatorControlSystem {
            elevators: (0..num_elevators).map(Elevator::new).collect(),
            pickup_requests: Vec::new(),
            rng,
        }
    }

    /// Status snapshot of every car, in car-id order.
    pub fn status(&self) -> Vec<ElevatorStatus> {
        self.elevators.iter().map(|e| e.status()).collect()
    }

    /// Overrides one car's position and goal.
    pub fn update(
        &mut self,
        elevator_id: usize,
        floor_number: i32,
        goal_floor: i32,
    ) -> Result<(), DispatchError> {
        match self.elevators.get_mut(elevator_id) {
            Some(elevator) => {
                elevator.update(floor_number, goal_floor);
                Ok(())
            }
            None => Err(DispatchError::InvalidElevatorId {
                id: elevator_id,
                num_elevators: self.elevators.len(),
            }),
        }
    }

    /// Queues a pickup request. `direction` is any negative value for
    /// down or any positive value for up; zero is rejected and the queue
    /// is left untouched.
    pub fn pickup(&mut self, pickup_floor: i32, direction: i32) -> Result<(), DispatchError> {
        let direction = Direction::try_from(direction)?;
        debug!(
            "Queueing pickup request for floor {} going {:?}",
            pickup_floor, direction
        );
        self.pickup_requests.push(PickupRequest {
            floor: pickup_floor,
            direction,
        });
        Ok(())
    }

    /// Number of pickups still waiting for a car.
    pub fn pending_requests(&self) -> usize {
        self.pickup_requests.len()
    }

    /// One simulation tick: assignment phase, then motion phase.
    pub fn step(&mut self) {
        // Assignment: resolve the queue in arrival order. Requests that
        // cannot be placed stay queued for the next step.
        let requests = std::mem::take(&mut self.pickup_requests);
        for request in requests {
            match self.find_elevator_for_pickup_request(&request) {
                Ok(elevator_id) => {
                    info!(
                        "Setting goal for elevator {} to floor {}",
                        elevator_id, request.floor
                    );
                    let elevator = &mut self.elevators[elevator_id];
                    let current_floor = elevator.current_floor();
                    elevator.update(current_floor, request.floor);
                    elevator.set_busy(true);
                }
                Err(e) => {
                    warn!("{}, keeping pickup for floor {} queued", e, request.floor);
                    self.pickup_requests.push(request);
                }
            }
        }

        // Motion: arrival clears busy, then every still-busy car moves
        // one floor toward its goal.
        for elevator in self.elevators.iter_mut() {
            if elevator.current_floor() == elevator.goal_floor() {
                elevator.set_busy(false);
            }
            if elevator.is_busy() {
                elevator.advance();
            }
        }
    }

    /// Picks the car for a pickup request: the closest non-busy car
    /// already traveling in the request's direction, ties broken by
    /// lowest car id. With no such car, a uniformly random non-busy car.
    /// With every car busy, `NoAvailableElevator`.
    ///
    /// A car with direction 0 matches neither sign, so an idle car is
    /// only ever reached through the random fallback.
    fn find_elevator_for_pickup_request(
        &mut self,
        request: &PickupRequest,
    ) -> Result<usize, DispatchError> {
        let mut closest: Option<(usize, i32)> = None;

        for elevator in self.elevators.iter() {
            if elevator.is_busy() {
                continue;
            }
            let matches_direction = match request.direction {
                Direction::Down => elevator.direction() < 0,
                Direction::Up => elevator.direction() > 0,
            };
            if !matches_direction {
                continue;
            }

            let delta = (request.floor - elevator.current_floor()).abs();
            match closest {
                Some((_, best_delta)) if delta >= best_delta => {}
                _ => closest = Some((elevator.id(), delta)),
            }
        }

        if let Some((elevator_id, _)) = closest {
            info!(
                "Found elevator {} for pickup request at floor {}",
                elevator_id, request.floor
            );
            return Ok(elevator_id);
        }

        let idle: Vec<usize> = self
            .elevators
            .iter()
            .filter(|e| !e.is_busy())
            .map(|e| e.id())
            .collect();

        match idle.choose(&mut self.rng.0) {
            Some(&elevator_id) => {
                info!(
                    "No elevator matches pickup request at floor {}, falling back to elevator {}",
                    request.floor, elevator_id
                );
                Ok(elevator_id)
            }
            None => Err(DispatchError::NoAvailableElevator),
        }
    }
}
